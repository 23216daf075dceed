use serde::{Deserialize, Serialize};

pub type PrincipalId = i64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrincipalType {
    EndUser,
    SystemBot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoleType {
    Owner,
    Dba,
    Developer,
}

/// A user or bot account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub id: PrincipalId,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub principal_type: Option<PrincipalType>,
    pub role: Option<RoleType>,
}
