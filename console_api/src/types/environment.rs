//! Environment, instance, database and data source shapes used by the console helpers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::common::RowStatus;

pub type EnvironmentId = i64;
pub type InstanceId = i64;
pub type DatabaseId = i64;
pub type DataSourceId = i64;

/// A deployment stage such as "Test" or "Prod".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub id: EnvironmentId,
    pub name: String,
    /// Position in the pipeline, starting at 0.
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub row_status: RowStatus,
}

/// A database server registered in an environment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub id: InstanceId,
    pub name: String,
    pub environment: Environment,
    #[serde(default)]
    pub row_status: RowStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    pub id: DatabaseId,
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataSourceType {
    Admin,
    Rw,
    Ro,
}

impl fmt::Display for DataSourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "ADMIN"),
            Self::Rw => write!(f, "RW"),
            Self::Ro => write!(f, "RO"),
        }
    }
}

/// Connection credentials for a database.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub id: DataSourceId,
    pub name: String,
    #[serde(rename = "type")]
    pub data_source_type: DataSourceType,
}
