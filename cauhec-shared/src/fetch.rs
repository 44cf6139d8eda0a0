//! Fetch lifecycle shared by every page.
//!
//! A page starts in [`FetchState::Loading`] and settles exactly once per load
//! into `Ready` or `Error`. Loads are not cancelled; a [`LoadTicket`] lets the
//! page drop a result whose load has been superseded or whose view is gone.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::warn;

use crate::api::ApiError;

/// Which state a [`FetchState`] is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchStatus {
    Loading,
    Ready,
    Error,
}

/// Data of one page load.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Loading,
    Ready(T),
    /// The load failed. `fallback` keeps the view populated when the page
    /// has something sensible to show anyway; it is always flagged as such.
    Error { message: String, fallback: Option<T> },
}

impl<T> FetchState<T> {
    /// Settles a load: `Ok` becomes `Ready`, `Err` becomes `Error` with
    /// `context` prefixed to the message and the page's fallback attached.
    pub fn settle(
        result: Result<T, ApiError>,
        context: &str,
        fallback: impl FnOnce() -> Option<T>,
    ) -> Self {
        match result {
            Ok(data) => Self::Ready(data),
            Err(err) => {
                warn!(context, error = %err, "page load failed");
                Self::Error {
                    message: format!("{context}: {}", err.user_message()),
                    fallback: fallback(),
                }
            }
        }
    }

    #[must_use]
    pub fn status(&self) -> FetchStatus {
        match self {
            Self::Loading => FetchStatus::Loading,
            Self::Ready(_) => FetchStatus::Ready,
            Self::Error { .. } => FetchStatus::Error,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Ready data, or the fallback of a failed load.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loading => None,
            Self::Ready(data) => Some(data),
            Self::Error { fallback, .. } => fallback.as_ref(),
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The data on screen is a stand-in for a failed load.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Error { fallback: Some(_), .. })
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            Self::Loading => FetchState::Loading,
            Self::Ready(data) => FetchState::Ready(f(data)),
            Self::Error { message, fallback } => FetchState::Error {
                message,
                fallback: fallback.map(f),
            },
        }
    }
}

impl<T> FetchState<Vec<T>> {
    /// Number of records on screen, fallback included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Counter identifying the latest load of one page instance.
#[derive(Debug, Clone, Default)]
pub struct LoadGeneration {
    current: Arc<AtomicU64>,
}

impl LoadGeneration {
    /// Starts a load, superseding every earlier ticket.
    #[must_use]
    pub fn begin(&self) -> LoadTicket {
        let id = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTicket {
            generation: Arc::clone(&self.current),
            id,
        }
    }

    /// Supersedes every outstanding ticket, e.g. when the view is torn down.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

/// Handle for one load; only the newest ticket may publish its result.
#[derive(Debug, Clone)]
pub struct LoadTicket {
    generation: Arc<AtomicU64>,
    id: u64,
}

impl LoadTicket {
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.id
    }
}
