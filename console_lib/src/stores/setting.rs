//! Key-value workspace settings backed by `DashMap`.

use console_api::types::{Setting, SettingName};
use console_api::Client;
use dashmap::DashMap;

use crate::error::ConsoleError;

#[derive(Default)]
pub struct SettingStore {
    settings: DashMap<SettingName, Setting>,
}

impl SettingStore {
    pub fn get(&self, name: &str) -> Option<Setting> {
        self.settings.get(name).map(|entry| entry.value().clone())
    }

    pub fn insert(&self, setting: Setting) {
        self.settings.insert(setting.name.clone(), setting);
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Fetches `/api/setting`, replacing any settings with the same name.
    pub async fn fetch_settings(&self, client: &Client) -> Result<(), ConsoleError> {
        if let Some(settings) = client.get_settings().await? {
            tracing::debug!(count = settings.len(), "settings loaded");
            for setting in settings {
                self.insert(setting);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setting(name: &str, value: &str) -> Setting {
        Setting {
            name: name.to_string(),
            value: value.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn insert_and_get() {
        let store = SettingStore::default();
        assert!(store.is_empty());
        store.insert(setting("bb.branding.logo", "old"));
        store.insert(setting("bb.branding.logo", "new"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("bb.branding.logo").unwrap().value, "new");
        assert!(store.get("missing").is_none());
    }
}
