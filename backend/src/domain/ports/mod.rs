//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod about_query;
mod cost_command;
mod cost_repository;
mod report_query;
mod user_repository;
mod user_summary_query;

#[cfg(test)]
pub use about_query::MockAboutQuery;
pub use about_query::AboutQuery;
#[cfg(test)]
pub use cost_command::MockCostCommand;
pub use cost_command::CostCommand;
#[cfg(test)]
pub use cost_repository::MockCostRepository;
pub use cost_repository::{CostRepository, CostRepositoryError};
#[cfg(test)]
pub use report_query::MockReportQuery;
pub use report_query::ReportQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use user_summary_query::MockUserSummaryQuery;
pub use user_summary_query::UserSummaryQuery;
