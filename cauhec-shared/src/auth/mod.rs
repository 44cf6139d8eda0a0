//! Current-user state machine.
//!
//! The controller owns no navigation. It moves between [`AuthState`]s and
//! tells its subscribers; `navigation::redirect_for` decides what a new state
//! means for the view on screen.

use std::fmt;

use thiserror::Error;
use tracing::{info, warn};

use crate::api::{AdminClient, ApiError};
use crate::models::{AdminUser, LoginResponse};
use crate::session::SessionStore;

/// Shown when no login route could reach the backend.
pub const CANNOT_CONNECT_MESSAGE: &str =
    "Cannot connect to the server. Please contact the administrator.";
const MISSING_CREDENTIALS_MESSAGE: &str = "Please enter your email and password.";

/// Who is signed in, as far as this process knows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// The session has not been read yet.
    #[default]
    Unknown,
    Authenticated(AdminUser),
    Anonymous,
}

impl AuthState {
    #[must_use]
    pub fn user(&self) -> Option<&AdminUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The session is still being restored.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// A login that did not succeed, with a message fit for the login form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct LoginFailure {
    pub message: String,
}

impl LoginFailure {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<&ApiError> for LoginFailure {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::Network(_) => Self::new(CANNOT_CONNECT_MESSAGE),
            ApiError::Http {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Self::new(message.trim()),
            ApiError::Http { status: 401, .. } => Self::new("Invalid email or password."),
            ApiError::Http { status, .. } => Self::new(format!("Login failed (status {status}).")),
            ApiError::UnexpectedShape(detail) => Self::new(format!("Login failed: {detail}")),
            ApiError::Unauthenticated => Self::new("Login failed."),
        }
    }
}

type Listener = Box<dyn Fn(&AuthState)>;

/// Login, logout, and session restore over an injected [`SessionStore`].
pub struct AuthController {
    session: SessionStore,
    state: AuthState,
    listeners: Vec<Listener>,
}

impl fmt::Debug for AuthController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthController")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl AuthController {
    #[must_use]
    pub fn new(session: SessionStore) -> Self {
        Self {
            session,
            state: AuthState::Unknown,
            listeners: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Registers `listener` for every later transition.
    pub fn subscribe(&mut self, listener: impl Fn(&AuthState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Reads the stored session: authenticated when both token and user are
    /// present, anonymous otherwise.
    pub fn restore(&mut self) -> &AuthState {
        let session = self.session.read();
        let next = match session.user {
            Some(user) if session.token.is_some() => AuthState::Authenticated(user),
            _ => AuthState::Anonymous,
        };
        self.transition(next);
        &self.state
    }

    /// Signs in through the client's login routes and persists the session.
    ///
    /// # Errors
    /// A [`LoginFailure`] carrying a displayable message. The state is
    /// `Anonymous` afterwards.
    pub async fn login(
        &mut self,
        client: &AdminClient,
        email: &str,
        password: &str,
    ) -> Result<AdminUser, LoginFailure> {
        if let Err(failure) = check_credentials(email, password) {
            self.transition(AuthState::Anonymous);
            return Err(failure);
        }
        let outcome = client.login(email, password).await;
        self.apply_login(outcome)
    }

    /// Applies the outcome of [`AdminClient::login`] awaited elsewhere.
    ///
    /// Hosts that cannot hold the controller across an await (the browser
    /// keeps it in a `RefCell`) call the client themselves and hand the
    /// result here.
    ///
    /// # Errors
    /// As for [`AuthController::login`].
    pub fn apply_login(
        &mut self,
        outcome: Result<LoginResponse, ApiError>,
    ) -> Result<AdminUser, LoginFailure> {
        match outcome {
            Ok(LoginResponse { token, user }) => {
                if let Err(err) = self.session.save(&token, &user) {
                    warn!(error = %err, "failed to persist session");
                    if let Err(err) = self.session.clear() {
                        warn!(error = %err, "failed to clear partial session");
                    }
                    self.transition(AuthState::Anonymous);
                    return Err(LoginFailure::new(format!(
                        "Signed in, but the session could not be saved: {err}"
                    )));
                }
                self.transition(AuthState::Authenticated(user.clone()));
                Ok(user)
            }
            Err(err) => {
                warn!(error = %err, "login failed");
                self.transition(AuthState::Anonymous);
                Err(LoginFailure::from(&err))
            }
        }
    }

    /// Clears the session and becomes anonymous, whatever the store says.
    pub fn logout(&mut self) {
        if let Err(err) = self.session.clear() {
            warn!(error = %err, "failed to clear session on logout");
        }
        self.transition(AuthState::Anonymous);
    }

    fn transition(&mut self, next: AuthState) {
        info!(
            from = state_name(&self.state),
            to = state_name(&next),
            "auth state changed"
        );
        self.state = next;
        for listener in &self.listeners {
            listener(&self.state);
        }
    }
}

/// Rejects blank credentials before any request is made.
///
/// # Errors
/// A [`LoginFailure`] asking for both fields.
pub fn check_credentials(email: &str, password: &str) -> Result<(), LoginFailure> {
    if email.trim().is_empty() || password.is_empty() {
        Err(LoginFailure::new(MISSING_CREDENTIALS_MESSAGE))
    } else {
        Ok(())
    }
}

fn state_name(state: &AuthState) -> &'static str {
    match state {
        AuthState::Unknown => "unknown",
        AuthState::Authenticated(_) => "authenticated",
        AuthState::Anonymous => "anonymous",
    }
}
