//! Driving port for the static team listing.

use crate::domain::TeamMember;

/// Domain use-case port returning the people behind the service.
#[cfg_attr(test, mockall::automock)]
pub trait AboutQuery: Send + Sync {
    /// Team members in display order.
    fn team(&self) -> Vec<TeamMember>;
}
