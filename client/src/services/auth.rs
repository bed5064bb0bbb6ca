//! Authentication against the warehousemans endpoint
//!
//! Login validates a secret key against the backend's records and persists
//! the matching user as the current session. Unknown keys and mismatches
//! are normal outcomes, not errors.

use shared::models::Warehouseman;

use crate::api::ApiClient;
use crate::error::{AppError, AppResult};
use crate::session::SessionStore;

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Success(Warehouseman),
    UserNotFound,
    InvalidCredentials,
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    session: SessionStore,
}

impl AuthService {
    pub fn new(api: ApiClient, session: SessionStore) -> Self {
        Self { api, session }
    }

    /// Validate a secret key and open a session.
    ///
    /// The backend is queried filtered by key, then the key is re-verified
    /// locally against the returned record before it is accepted. The
    /// session write is fire-and-forget relative to the outcome: a storage
    /// failure is logged but the login still succeeds.
    pub async fn login(&self, secret_key: &str) -> AppResult<LoginOutcome> {
        if secret_key.is_empty() {
            return Err(AppError::Validation {
                field: "secretKey".to_string(),
                message: "secretKey is required".to_string(),
            });
        }

        let matches = self.api.get_warehousemen(secret_key).await?;

        let Some(user) = matches.into_iter().next() else {
            tracing::info!("Login failed: no warehouseman for the supplied key");
            return Ok(LoginOutcome::UserNotFound);
        };

        if user.secret_key != secret_key {
            tracing::info!("Login failed: secret key mismatch on returned record");
            return Ok(LoginOutcome::InvalidCredentials);
        }

        if let Err(e) = self.session.save(&user) {
            tracing::warn!("Failed to persist session: {}", e);
        }

        tracing::info!(user = %user.name, "Login succeeded");
        Ok(LoginOutcome::Success(user))
    }

    /// Close the session.
    pub fn logout(&self) -> AppResult<()> {
        self.session.clear()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn current_user(&self) -> Option<Warehouseman> {
        self.session.load()
    }
}
