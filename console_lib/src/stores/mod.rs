//! Process-wide state owned by the console, shared through `Arc`.
//!
//! Each store exposes a `fetch_*` operation that takes the HTTP client as a
//! parameter rather than holding it, so the client's interceptors can in turn
//! hold the stores without a reference cycle.

pub mod actuator;
pub mod notification;
pub mod plan;
pub mod session;
pub mod setting;

use std::sync::Arc;

use console_api::types::PrincipalId;
use console_api::Client;

pub use actuator::ActuatorStore;
pub use notification::{Notification, NotificationStore, NotificationStyle};
pub use plan::PlanStore;
pub use session::SessionStore;
pub use setting::SettingStore;

use crate::bootstrap::StartupFetch;
use crate::error::ConsoleError;
use crate::router::{HistoryRouter, Router};

/// The console's stores and router, cheap to clone.
#[derive(Clone)]
pub struct ConsoleStores {
    pub actuator: Arc<ActuatorStore>,
    pub setting: Arc<SettingStore>,
    pub plan: Arc<PlanStore>,
    pub session: Arc<SessionStore>,
    pub notification: Arc<NotificationStore>,
    pub router: Arc<dyn Router>,
}

impl ConsoleStores {
    /// Creates empty stores with an in-memory router.
    pub fn new(persisted_user: Option<PrincipalId>) -> Self {
        Self::with_router(persisted_user, Arc::new(HistoryRouter::default()))
    }

    pub fn with_router(persisted_user: Option<PrincipalId>, router: Arc<dyn Router>) -> Self {
        Self {
            actuator: Arc::new(ActuatorStore::default()),
            setting: Arc::new(SettingStore::default()),
            plan: Arc::new(PlanStore::default()),
            session: Arc::new(SessionStore::new(persisted_user)),
            notification: Arc::new(NotificationStore::default()),
            router,
        }
    }

    /// Binds the stores to a client for the startup fetches.
    pub fn fetcher<'a>(&'a self, client: &'a Client) -> StoreFetcher<'a> {
        StoreFetcher {
            stores: self,
            client,
        }
    }
}

/// Runs the startup fetches of [`ConsoleStores`] against a client.
pub struct StoreFetcher<'a> {
    stores: &'a ConsoleStores,
    client: &'a Client,
}

impl StartupFetch for StoreFetcher<'_> {
    async fn fetch_server_info(&self) -> Result<(), ConsoleError> {
        self.stores.actuator.fetch_info(self.client).await
    }

    async fn fetch_settings(&self) -> Result<(), ConsoleError> {
        self.stores.setting.fetch_settings(self.client).await
    }

    async fn fetch_current_plan(&self) -> Result<(), ConsoleError> {
        self.stores.plan.fetch_current_plan(self.client).await
    }

    async fn restore_user_session(&self) -> Result<(), ConsoleError> {
        self.stores.session.restore_user(self.client).await
    }
}
