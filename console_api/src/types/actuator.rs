use serde::{Deserialize, Serialize};

/// Operational metadata reported by `/api/actuator/info`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActuatorInfo {
    pub version: String,
    pub git_commit: String,
    pub readonly: bool,
    pub demo: bool,
    /// Canonical origin of the backend, e.g. `https://app.example.com`.
    pub host: String,
    pub port: String,
    pub need_admin_setup: bool,
}
