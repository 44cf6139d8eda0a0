//! `localStorage` backend for the session.

use shared::{SessionBackend, SessionError};
use web_sys::Storage;

/// Session keys live in the page origin's `localStorage`, raw strings as
/// written by [`shared::SessionStore`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageBackend;

fn storage() -> Result<Storage, SessionError> {
    web_sys::window()
        .ok_or_else(|| SessionError::Unavailable("no window".to_string()))?
        .local_storage()
        .map_err(|err| SessionError::Unavailable(format!("{err:?}")))?
        .ok_or_else(|| SessionError::Unavailable("localStorage is disabled".to_string()))
}

impl SessionBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        storage()?
            .set_item(key, value)
            .map_err(|err| SessionError::Write {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        storage()?
            .remove_item(key)
            .map_err(|err| SessionError::Write {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}
