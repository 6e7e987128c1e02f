//! Static listing of the people behind the service.

use serde::Serialize;

use super::ports::AboutQuery;

/// One team member as shown by the about endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl TeamMember {
    fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
        }
    }
}

/// Built-in roster implementing [`AboutQuery`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TeamRoster;

impl AboutQuery for TeamRoster {
    fn team(&self) -> Vec<TeamMember> {
        vec![
            TeamMember::new("Shirly", "Avrahamoff"),
            TeamMember::new("Shani", "Zicher"),
        ]
    }
}
