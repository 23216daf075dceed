//! Backend operational metadata.

use std::sync::RwLock;

use console_api::types::ActuatorInfo;
use console_api::Client;

use crate::error::ConsoleError;

#[derive(Default)]
pub struct ActuatorStore {
    info: RwLock<Option<ActuatorInfo>>,
}

impl ActuatorStore {
    pub fn info(&self) -> Option<ActuatorInfo> {
        self.info.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// The backend's canonical host, or `None` before the info is known or when it is blank.
    pub fn host(&self) -> Option<String> {
        self.info
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(|info| info.host.clone())
            .filter(|host| !host.is_empty())
    }

    pub fn set_info(&self, info: ActuatorInfo) {
        *self.info.write().unwrap_or_else(|e| e.into_inner()) = Some(info);
    }

    /// Fetches `/api/actuator/info`. A recovered failure leaves the store unchanged.
    pub async fn fetch_info(&self, client: &Client) -> Result<(), ConsoleError> {
        if let Some(info) = client.get_actuator_info().await? {
            tracing::debug!(version = %info.version, host = %info.host, "actuator info loaded");
            self.set_info(info);
        }
        Ok(())
    }
}
