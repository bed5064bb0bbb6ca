//! Persisted authentication session
//!
//! One JSON file under the user data directory holds the authenticated
//! warehouseman, standing in for device-local storage. The session has an
//! explicit lifecycle: read once at startup, written on login, cleared on
//! logout. There is no expiry.

use std::fs;
use std::path::PathBuf;

use shared::models::Warehouseman;

use crate::error::{AppError, AppResult};

/// File-backed session store
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the persisted session. A missing file means logged out; an
    /// unreadable one is logged and treated the same.
    pub fn load(&self) -> Option<Warehouseman> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return None,
        };

        match serde_json::from_str(&contents) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Discarding unreadable session file: {}", e);
                None
            }
        }
    }

    /// Persist the authenticated user.
    pub fn save(&self, user: &Warehouseman) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::Storage(format!("Failed to create session dir: {}", e)))?;
        }

        let contents = serde_json::to_string(user)
            .map_err(|e| AppError::Storage(format!("Failed to serialize session: {}", e)))?;

        fs::write(&self.path, contents)
            .map_err(|e| AppError::Storage(format!("Failed to write session: {}", e)))
    }

    /// Clear the persisted session. Clearing an absent session is fine.
    pub fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!("Failed to clear session: {}", e))),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.load().is_some()
    }
}
