use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder ID for a reference that has not been chosen yet.
pub const UNKNOWN_ID: i64 = -1;

/// Soft-delete state shared by most console resources.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RowStatus {
    #[default]
    Normal,
    Archived,
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Archived => write!(f, "ARCHIVED"),
        }
    }
}
