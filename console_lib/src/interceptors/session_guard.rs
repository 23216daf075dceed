use std::sync::Arc;

use console_api::{ErrorFlow, Interceptor, RequestError};

use crate::router::{Router, SIGNIN_ROUTE};
use crate::stores::{ActuatorStore, SessionStore};

/// Forces a logout when our own backend rejects the session.
///
/// A 401 can also come from a third-party integration such as a VCS
/// provider; only a 401 whose URL starts with the backend host reported by
/// the actuator invalidates the session. The error always continues down
/// the chain.
pub struct SessionGuard {
    actuator: Arc<ActuatorStore>,
    session: Arc<SessionStore>,
    router: Arc<dyn Router>,
}

impl SessionGuard {
    pub fn new(
        actuator: Arc<ActuatorStore>,
        session: Arc<SessionStore>,
        router: Arc<dyn Router>,
    ) -> Self {
        Self {
            actuator,
            session,
            router,
        }
    }

    fn is_first_party(&self, url: &str) -> bool {
        self.actuator
            .host()
            .is_some_and(|host| url.starts_with(&host))
    }
}

impl Interceptor for SessionGuard {
    fn on_error(&self, error: RequestError) -> ErrorFlow {
        if let Some(resp) = error.response() {
            if resp.status == 401 {
                if self.is_first_party(&resp.url) {
                    self.session.logout();
                    self.router.navigate(SIGNIN_ROUTE);
                } else {
                    tracing::debug!(url = %resp.url, "ignoring 401 from third-party host");
                }
            }
        }
        ErrorFlow::Next(error)
    }
}
