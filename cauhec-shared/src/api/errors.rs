use thiserror::Error;

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    Unauthenticated,
    Http,
    Network,
    UnexpectedShape,
}

/// Failure of a backend call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The call needs a bearer token and none is stored. No request was sent.
    #[error("authentication token not found; please sign in again")]
    Unauthenticated,

    /// The server answered with a non-success status.
    #[error("server responded with status {status}{}", detail_suffix(.message))]
    Http { status: u16, message: Option<String> },

    /// DNS, connection, or timeout failure.
    #[error("could not reach the server: {0}")]
    Network(String),

    /// The body parsed but lacked what the caller needed, or was not JSON.
    #[error("unexpected response from the server: {0}")]
    UnexpectedShape(String),
}

fn detail_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(|message| format!(": {message}"))
        .unwrap_or_default()
}

impl ApiError {
    #[must_use]
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Unauthenticated => ApiErrorKind::Unauthenticated,
            Self::Http { .. } => ApiErrorKind::Http,
            Self::Network(_) => ApiErrorKind::Network,
            Self::UnexpectedShape(_) => ApiErrorKind::UnexpectedShape,
        }
    }

    /// HTTP status, when the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// A 401, which ends the session.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Whether the login policy should move on to its next route.
    #[must_use]
    pub fn is_transport_failure(&self) -> bool {
        matches!(self.kind(), ApiErrorKind::Network | ApiErrorKind::Http)
    }

    /// The server's own message if it sent one, else this error's display.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.trim().to_string(),
            Self::Http { status: 401, .. } => "Your session has expired. Please sign in again.".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::UnexpectedShape(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Http {
                status: status.as_u16(),
                message: None,
            }
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::UnexpectedShape(err.to_string())
    }
}
