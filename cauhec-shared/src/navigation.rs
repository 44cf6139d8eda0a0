//! Views, the route guard, and the redirect rule that follows auth state.

use std::fmt;

use crate::auth::AuthState;
use crate::session::SessionStore;

/// Every screen of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum View {
    Login,
    #[default]
    Dashboard,
    Users,
    Connections,
    Institutions,
    Profiles,
    UserDetail {
        id: String,
    },
    NotFound,
}

impl View {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Dashboard => "/".to_string(),
            Self::Users => "/users".to_string(),
            Self::Connections => "/connections".to_string(),
            Self::Institutions => "/institutions".to_string(),
            Self::Profiles => "/profiles".to_string(),
            Self::UserDetail { id } => format!("/user/{id}"),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// Resolves a path to its view. Unknown paths map to `NotFound`.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Dashboard,
            "/login" => Self::Login,
            "/users" => Self::Users,
            "/connections" => Self::Connections,
            "/institutions" => Self::Institutions,
            "/profiles" => Self::Profiles,
            other => match other.strip_prefix("/user/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Self::UserDetail {
                    id: id.to_string(),
                },
                _ => Self::NotFound,
            },
        }
    }

    /// Whether entering requires a session.
    #[must_use]
    pub fn is_guarded(&self) -> bool {
        !matches!(self, Self::Login | Self::NotFound)
    }

    /// Heading shown for the view.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Dashboard => "Dashboard",
            Self::Users => "Users",
            Self::Connections => "Connections",
            Self::Institutions => "Institutions",
            Self::Profiles => "Profiles",
            Self::UserDetail { .. } => "User details",
            Self::NotFound => "Page not found",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Where to send the user after an auth state or view change, if anywhere.
///
/// An anonymous user on any view but login goes to login; an authenticated
/// user on login goes to the dashboard. `Unknown` never redirects.
#[must_use]
pub fn redirect_for(state: &AuthState, current: &View) -> Option<View> {
    match (state, current) {
        (AuthState::Anonymous, View::Login) => None,
        (AuthState::Anonymous, _) => Some(View::Login),
        (AuthState::Authenticated(_), View::Login) => Some(View::Dashboard),
        _ => None,
    }
}

/// Outcome of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Enter,
    Redirect(View),
}

/// Gates guarded views on the presence of a stored token.
///
/// The store is read on every check so a session cleared by a 401 is seen
/// by the next navigation.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    session: SessionStore,
}

impl RouteGuard {
    #[must_use]
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn can_enter(&self) -> bool {
        self.session.read().token.is_some()
    }

    #[must_use]
    pub fn check(&self, view: &View) -> GuardDecision {
        if !view.is_guarded() || self.can_enter() {
            GuardDecision::Enter
        } else {
            tracing::debug!(view = %view, "guard redirecting to login");
            GuardDecision::Redirect(View::Login)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AdminUser;

    fn admin() -> AdminUser {
        serde_json::from_value(serde_json::json!({"id": 1, "email": "admin@cauhec.org"})).unwrap()
    }

    fn guarded_views() -> Vec<View> {
        vec![
            View::Dashboard,
            View::Users,
            View::Connections,
            View::Institutions,
            View::Profiles,
            View::UserDetail { id: "42".into() },
        ]
    }

    #[test]
    fn test_paths_resolve_back_to_views() {
        for view in guarded_views().into_iter().chain([View::Login]) {
            assert_eq!(View::from_path(&view.path()), view);
        }
        assert_eq!(View::from_path("/users/"), View::Users);
        assert_eq!(View::from_path("/nope"), View::NotFound);
        assert_eq!(View::from_path("/user/"), View::NotFound);
        assert_eq!(View::from_path("/user/1/edit"), View::NotFound);
    }

    #[test]
    fn test_guard_denies_without_token() {
        let guard = RouteGuard::new(SessionStore::in_memory());
        assert!(!guard.can_enter());
        for view in guarded_views() {
            assert_eq!(guard.check(&view), GuardDecision::Redirect(View::Login));
        }
        assert_eq!(guard.check(&View::Login), GuardDecision::Enter);
        assert_eq!(guard.check(&View::NotFound), GuardDecision::Enter);
    }

    #[test]
    fn test_guard_permits_with_session_and_rechecks() {
        let store = SessionStore::in_memory();
        store.save("tok", &admin()).unwrap();
        let guard = RouteGuard::new(store.clone());
        for view in guarded_views() {
            assert_eq!(guard.check(&view), GuardDecision::Enter);
        }
        store.clear().unwrap();
        assert_eq!(
            guard.check(&View::Users),
            GuardDecision::Redirect(View::Login)
        );
    }

    #[test]
    fn test_redirect_rules() {
        let authed = AuthState::Authenticated(admin());
        assert_eq!(
            redirect_for(&AuthState::Anonymous, &View::Users),
            Some(View::Login)
        );
        assert_eq!(
            redirect_for(&AuthState::Anonymous, &View::NotFound),
            Some(View::Login)
        );
        assert_eq!(redirect_for(&AuthState::Anonymous, &View::Login), None);
        assert_eq!(redirect_for(&authed, &View::Login), Some(View::Dashboard));
        assert_eq!(redirect_for(&authed, &View::Profiles), None);
        assert_eq!(redirect_for(&AuthState::Unknown, &View::Users), None);
        assert_eq!(redirect_for(&AuthState::Unknown, &View::Login), None);
    }
}
