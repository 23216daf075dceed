use std::sync::Arc;

use console_api::{ErrorFlow, FailureCode, Interceptor, RequestError};

use crate::stores::{Notification, NotificationStore};

/// Module tag on notifications raised by the network layer.
pub const NOTIFICATION_MODULE: &str = "bytebase";

/// Title shown when a request times out.
pub const SERVER_UNREACHABLE: &str = "Connecting server timeout. Make sure the server is running.";

/// Turns failed requests into user notifications.
///
/// Any error that carries a response is recovered, with a critical
/// notification when the body has a `message`. A timeout is recovered with a
/// fixed notification. Everything else reaches the caller.
pub struct ErrorNotifier {
    notifications: Arc<NotificationStore>,
}

impl ErrorNotifier {
    pub fn new(notifications: Arc<NotificationStore>) -> Self {
        Self { notifications }
    }
}

impl Interceptor for ErrorNotifier {
    fn on_error(&self, error: RequestError) -> ErrorFlow {
        if let Some(resp) = error.response() {
            if let Some(message) = resp.message() {
                self.notifications
                    .push_notification(Notification::critical(NOTIFICATION_MODULE, message));
            }
            return ErrorFlow::Recovered;
        }

        if error.failure_code() == Some(FailureCode::ConnectionAborted) {
            self.notifications
                .push_notification(Notification::critical(NOTIFICATION_MODULE, SERVER_UNREACHABLE));
            return ErrorFlow::Recovered;
        }

        ErrorFlow::Next(error)
    }
}
