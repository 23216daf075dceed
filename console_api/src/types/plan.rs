use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlanType {
    #[default]
    Free,
    Team,
    Enterprise,
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => write!(f, "FREE"),
            Self::Team => write!(f, "TEAM"),
            Self::Enterprise => write!(f, "ENTERPRISE"),
        }
    }
}

/// Subscription plan returned by `/api/plan`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(rename = "type")]
    pub plan_type: PlanType,
}
