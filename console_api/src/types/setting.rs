use serde::{Deserialize, Serialize};

/// Name of a workspace setting, e.g. `bb.branding.logo`.
pub type SettingName = String;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub name: SettingName,
    pub value: String,
    #[serde(default)]
    pub description: String,
}
