//! Durable authentication state.
//!
//! The session is two keys in a key/value backend: the bearer token as a raw
//! string and the signed-in user as a JSON object. Backends differ per host
//! (browser `localStorage`, files under the user config directory, memory in
//! tests); the two-key layout and the "unreadable means signed out" rule live
//! here so every host behaves the same.

#[cfg(not(target_arch = "wasm32"))]
mod file;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileBackend;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::AdminUser;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the serialized user record.
pub const USER_KEY: &str = "user";

/// Failure writing to or removing from the durable backend.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write session key `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to serialize session user: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Minimal string key/value storage a session can live in.
pub trait SessionBackend: Send + Sync {
    /// Returns the stored value, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Removes `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// Snapshot of the persisted authentication state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<AdminUser>,
}

impl Session {
    /// Token and user are both present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// Reads and writes the session through an injected backend.
///
/// Cloning is cheap and every clone sees the same storage.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(backend: impl SessionBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// A store backed by process memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::default())
    }

    /// Persists both values, overwriting any prior session. A failed user
    /// write removes the token again, so no half session is left behind.
    ///
    /// # Errors
    /// Returns [`SessionError`] if the backend rejects either write.
    pub fn save(&self, token: &str, user: &AdminUser) -> Result<(), SessionError> {
        let user_json = serde_json::to_string(user)?;
        self.backend.set(TOKEN_KEY, token)?;
        if let Err(err) = self.backend.set(USER_KEY, &user_json) {
            if let Err(rollback) = self.backend.remove(TOKEN_KEY) {
                warn!(error = %rollback, "failed to remove token after a partial save");
            }
            return Err(err);
        }
        debug!(user_id = user.id, "session saved");
        Ok(())
    }

    /// Current persisted values. Missing, blank, or malformed entries read as
    /// `None`, and a user record without a token is not surfaced.
    #[must_use]
    pub fn read(&self) -> Session {
        let token = self
            .backend
            .get(TOKEN_KEY)
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());
        let Some(token) = token else {
            return Session::default();
        };

        let user = self
            .backend
            .get(USER_KEY)
            .and_then(|raw| match serde_json::from_str::<AdminUser>(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    warn!(error = %err, "ignoring malformed session user record");
                    None
                }
            });

        Session {
            token: Some(token),
            user,
        }
    }

    /// The bearer token alone.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read().token
    }

    /// Removes both keys. Both removals are attempted even if the first fails.
    ///
    /// # Errors
    /// Returns the first backend failure.
    pub fn clear(&self) -> Result<(), SessionError> {
        let token = self.backend.remove(TOKEN_KEY);
        let user = self.backend.remove(USER_KEY);
        debug!("session cleared");
        token.and(user)
    }
}

/// In-process backend, used by tests and short-lived tools.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| SessionError::Unavailable(err.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| SessionError::Unavailable(err.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}
