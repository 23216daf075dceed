//! User-facing notification queue.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationStyle {
    Info,
    Success,
    Warn,
    Critical,
}

impl fmt::Display for NotificationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Success => write!(f, "SUCCESS"),
            Self::Warn => write!(f, "WARN"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A transient message for the user, tagged with the module that raised it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub module: String,
    pub style: NotificationStyle,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Notification {
    pub fn new(module: &str, style: NotificationStyle, title: &str) -> Self {
        Self {
            module: module.to_string(),
            style,
            title: title.to_string(),
            description: None,
        }
    }

    pub fn critical(module: &str, title: &str) -> Self {
        Self::new(module, NotificationStyle::Critical, title)
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Append-only display queue. The UI drains it.
#[derive(Default)]
pub struct NotificationStore {
    queue: Mutex<VecDeque<Notification>>,
}

impl NotificationStore {
    pub fn push_notification(&self, notification: Notification) {
        tracing::debug!(
            module = %notification.module,
            style = %notification.style,
            "{}",
            notification.title
        );
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(notification);
    }

    /// Returns pending notifications without removing them, oldest first.
    pub fn pending(&self) -> Vec<Notification> {
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .cloned()
            .collect()
    }

    /// Removes and returns all pending notifications, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .drain(..)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.queue.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_returns_in_push_order() {
        let store = NotificationStore::default();
        store.push_notification(Notification::critical("bytebase", "first"));
        store.push_notification(
            Notification::new("bytebase", NotificationStyle::Info, "second")
                .with_description("details"),
        );
        assert_eq!(store.len(), 2);
        assert_eq!(store.pending().len(), 2);

        let drained = store.drain();
        assert_eq!(drained[0].title, "first");
        assert_eq!(drained[1].description.as_deref(), Some("details"));
        assert!(store.is_empty());
    }
}
