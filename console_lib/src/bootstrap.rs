//! Startup orchestration.
//!
//! ```text
//! fetch_server_info ─┐
//! fetch_settings ────┤
//! fetch_current_plan ┼─ join (all settle) → build App → register → mount once
//! restore_user ──────┘
//! ```
//!
//! The four fetches are independent and run concurrently on the current
//! task. A failed fetch is recorded and never blocks the mount; surfacing
//! it to the user is the interceptor chain's job.

use std::future::Future;

use crate::app::{App, Globals, MountTarget, MountedApp, COMPONENTS, MOUNT_ANCHOR};
use crate::directives::{DataSourceTypeLabel, Highlight};
use crate::error::ConsoleError;
use crate::stores::ConsoleStores;

/// The initialization calls that must settle before the console mounts.
pub trait StartupFetch {
    fn fetch_server_info(&self) -> impl Future<Output = Result<(), ConsoleError>> + Send;
    fn fetch_settings(&self) -> impl Future<Output = Result<(), ConsoleError>> + Send;
    fn fetch_current_plan(&self) -> impl Future<Output = Result<(), ConsoleError>> + Send;
    fn restore_user_session(&self) -> impl Future<Output = Result<(), ConsoleError>> + Send;
}

/// Outcome of the startup fetches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettleReport {
    /// Names of the fetches that failed, in declaration order.
    pub failed: Vec<&'static str>,
}

impl SettleReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Brings the console from nothing to a mounted application.
pub struct Bootstrap<F> {
    fetch: F,
    globals: Globals,
    stores: Option<ConsoleStores>,
}

impl<F> Bootstrap<F>
where
    F: StartupFetch,
{
    pub fn new(fetch: F, globals: Globals) -> Self {
        Self {
            fetch,
            globals,
            stores: None,
        }
    }

    /// Hands the stores to the application root.
    pub fn with_stores(mut self, stores: ConsoleStores) -> Self {
        self.stores = Some(stores);
        self
    }

    /// Waits for every startup fetch to settle, then mounts on `target` exactly once.
    pub async fn initialize<T>(self, target: &T) -> Result<MountedApp, ConsoleError>
    where
        T: MountTarget + ?Sized,
    {
        tracing::debug!("dev: {}", self.globals.is_dev());
        tracing::debug!("release: {}", self.globals.is_release());

        let settle = self.settle().await;
        if !settle.all_succeeded() {
            tracing::debug!(failed = ?settle.failed, "mounting despite failed startup fetches");
        }

        let mut app = App::new(self.globals)
            .directive("highlight", Highlight)
            .directive("data-source-type", DataSourceTypeLabel);
        if let Some(stores) = self.stores {
            app = app.with_stores(stores);
        }
        let app = COMPONENTS
            .iter()
            .fold(app, |app, name| app.component(name));

        app.mount(MOUNT_ANCHOR, target, settle)
    }

    async fn settle(&self) -> SettleReport {
        let (info, settings, plan, user) = tokio::join!(
            self.fetch.fetch_server_info(),
            self.fetch.fetch_settings(),
            self.fetch.fetch_current_plan(),
            self.fetch.restore_user_session(),
        );

        let mut report = SettleReport::default();
        for (name, result) in [
            ("actuator/fetchInfo", info),
            ("setting/fetchSetting", settings),
            ("plan/fetchCurrentPlan", plan),
            ("auth/restoreUser", user),
        ] {
            if let Err(e) = result {
                tracing::debug!(step = name, "startup fetch failed: {}", e);
                report.failed.push(name);
            }
        }
        report
    }
}
