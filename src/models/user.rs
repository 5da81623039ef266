//! User groups.
//!
//! Group checks gate what the front-end offers; the store itself never
//! enforces them.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum UserGroup {
    #[default]
    Admin,
    #[serde(rename = "Network Team")]
    NetworkTeam,
    #[serde(rename = "NOC Team")]
    NocTeam,
}

impl UserGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserGroup::Admin => "Admin",
            UserGroup::NetworkTeam => "Network Team",
            UserGroup::NocTeam => "NOC Team",
        }
    }

    /// Whether the group may add, edit or delete sites.
    pub fn can_manage_sites(&self) -> bool {
        matches!(self, UserGroup::Admin | UserGroup::NetworkTeam)
    }
}

impl std::fmt::Display for UserGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_management_gate() {
        assert!(UserGroup::Admin.can_manage_sites());
        assert!(UserGroup::NetworkTeam.can_manage_sites());
        assert!(!UserGroup::NocTeam.can_manage_sites());
    }

    #[test]
    fn test_group_serializes_with_display_name() {
        assert_eq!(
            serde_json::to_string(&UserGroup::NocTeam).unwrap(),
            "\"NOC Team\""
        );
        assert_eq!(UserGroup::NetworkTeam.to_string(), "Network Team");
    }
}
