//! The console's interceptors and the order they run in.
//!
//! ```text
//! request  → DevLogger → send
//! response → DevLogger → caller
//! error    → DevLogger → SessionGuard → ErrorNotifier ─┬→ recovered (Ok(None))
//!                                                      └→ caller (Err)
//! ```

pub mod dev_log;
pub mod error_notifier;
pub mod session_guard;

use console_api::InterceptorChain;

pub use dev_log::DevLogger;
pub use error_notifier::{ErrorNotifier, NOTIFICATION_MODULE, SERVER_UNREACHABLE};
pub use session_guard::SessionGuard;

use crate::config::BuildMode;
use crate::stores::ConsoleStores;

/// Builds the chain registered once at process start.
pub fn console_chain(mode: BuildMode, stores: &ConsoleStores) -> InterceptorChain {
    InterceptorChain::new()
        .with(DevLogger::new(mode))
        .with(SessionGuard::new(
            stores.actuator.clone(),
            stores.session.clone(),
            stores.router.clone(),
        ))
        .with(ErrorNotifier::new(stores.notification.clone()))
}
