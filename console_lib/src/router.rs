//! Navigation seam.

use std::sync::Mutex;

/// Route shown when the session is no longer valid.
pub const SIGNIN_ROUTE: &str = "auth.signin";

/// Anything that can move the user to a named route.
pub trait Router: Send + Sync {
    fn navigate(&self, route_name: &str);
}

/// In-memory router that records the navigation history.
#[derive(Default)]
pub struct HistoryRouter {
    history: Mutex<Vec<String>>,
}

impl HistoryRouter {
    pub fn current(&self) -> Option<String> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Router for HistoryRouter {
    fn navigate(&self, route_name: &str) {
        tracing::debug!(route = route_name, "navigate");
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(route_name.to_string());
    }
}
