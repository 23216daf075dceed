//! Library layer for the console: stores, interceptors, startup, and the application root.
//!
//! Wraps the `console_api` client with the console's interceptor chain and
//! the orchestration that brings the application from nothing to mounted.

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod directives;
pub mod error;
pub mod helpers;
pub mod interceptors;
pub mod issue_template;
pub mod router;
pub mod stores;

pub use console_api;
pub use console_api::types;
pub use console_api::{Client, RequestDescriptor, ResponseDescriptor};

pub use app::{App, Globals, MountTarget, MountedApp, COMPONENTS, MOUNT_ANCHOR};
pub use bootstrap::{Bootstrap, SettleReport, StartupFetch};
pub use config::{BuildMode, ConfigError, ConsoleConfig};
pub use error::ConsoleError;
pub use interceptors::console_chain;
pub use router::{HistoryRouter, Router, SIGNIN_ROUTE};
pub use stores::{ConsoleStores, Notification, NotificationStyle};

/// Builds the stores and a client wired to the console's interceptor chain.
pub fn connect(config: &ConsoleConfig) -> Result<(Client, ConsoleStores), ConsoleError> {
    let stores = ConsoleStores::new(config.user_id);
    let client = Client::builder(&config.base_url)
        .with_timeout(config.timeout)
        .with_interceptors(console_chain(config.mode, &stores))
        .build()?;
    Ok((client, stores))
}
