//! Signed-in user state.

use std::sync::RwLock;

use console_api::types::{Principal, PrincipalId};
use console_api::Client;

use crate::error::ConsoleError;

/// The current principal, plus the ID remembered from a previous sign-in.
pub struct SessionStore {
    current_user: RwLock<Option<Principal>>,
    persisted_id: RwLock<Option<PrincipalId>>,
}

impl SessionStore {
    pub fn new(persisted_id: Option<PrincipalId>) -> Self {
        Self {
            current_user: RwLock::new(None),
            persisted_id: RwLock::new(persisted_id),
        }
    }

    pub fn current_user(&self) -> Option<Principal> {
        self.current_user
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn persisted_id(&self) -> Option<PrincipalId> {
        *self.persisted_id.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    pub fn set_current_user(&self, principal: Principal) {
        *self.persisted_id.write().unwrap_or_else(|e| e.into_inner()) = Some(principal.id);
        *self.current_user.write().unwrap_or_else(|e| e.into_inner()) = Some(principal);
    }

    /// Re-loads the remembered principal. Without a remembered ID the session stays empty.
    pub async fn restore_user(&self, client: &Client) -> Result<(), ConsoleError> {
        let Some(id) = self.persisted_id() else {
            tracing::debug!("no persisted user, session left empty");
            return Ok(());
        };
        if let Some(principal) = client.get_principal(id).await? {
            tracing::debug!(user = %principal.email, "session restored");
            self.set_current_user(principal);
        }
        Ok(())
    }

    /// Forgets both the current and the remembered principal.
    pub fn logout(&self) {
        *self.current_user.write().unwrap_or_else(|e| e.into_inner()) = None;
        *self.persisted_id.write().unwrap_or_else(|e| e.into_inner()) = None;
        tracing::info!("session invalidated");
    }
}
