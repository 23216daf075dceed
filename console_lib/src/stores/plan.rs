use std::sync::RwLock;

use console_api::types::PlanType;
use console_api::Client;

use crate::error::ConsoleError;

/// Current subscription plan. Starts as `FREE` until the backend says otherwise.
#[derive(Default)]
pub struct PlanStore {
    current: RwLock<PlanType>,
}

impl PlanStore {
    pub fn current(&self) -> PlanType {
        *self.current.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set(&self, plan: PlanType) {
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = plan;
    }

    pub async fn fetch_current_plan(&self, client: &Client) -> Result<(), ConsoleError> {
        if let Some(plan) = client.get_plan().await? {
            tracing::debug!(plan = %plan.plan_type, "plan loaded");
            self.set(plan.plan_type);
        }
        Ok(())
    }
}
