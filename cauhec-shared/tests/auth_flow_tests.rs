//! Login, restore, guard, and logout across a real backend and a
//! file-backed session.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use tempfile::TempDir;

use common::{PASSWORD, Seen, TOKEN};
use shared::session::FileBackend;
use shared::{
    AdminClient, AuthController, AuthState, GuardDecision, RouteGuard, SessionStore, View,
    redirect_for,
};

fn file_store(dir: &TempDir) -> SessionStore {
    SessionStore::new(FileBackend::new(dir.path()))
}

#[tokio::test]
async fn test_login_persists_across_restart() {
    let base = common::serve(common::backend(Seen::default())).await;
    let dir = tempfile::tempdir().unwrap();

    {
        let store = file_store(&dir);
        let client = AdminClient::new(&base, store.clone());
        let mut auth = AuthController::new(store);
        auth.restore();
        assert_eq!(auth.state(), &AuthState::Anonymous);

        let user = auth
            .login(&client, "admin@cauhec.org", PASSWORD)
            .await
            .unwrap();
        assert_eq!(user.display_name(), "Ada Admin");
    }

    let store = file_store(&dir);
    let mut auth = AuthController::new(store.clone());
    assert_eq!(auth.restore(), &AuthState::Authenticated(common::admin_user()));
    assert_eq!(store.token().as_deref(), Some(TOKEN));

    let guard = RouteGuard::new(store);
    for view in [
        View::Dashboard,
        View::Users,
        View::Connections,
        View::Institutions,
        View::Profiles,
        View::UserDetail { id: "12".into() },
    ] {
        assert_eq!(guard.check(&view), GuardDecision::Enter);
    }
}

#[tokio::test]
async fn test_failed_login_stays_anonymous() {
    let base = common::serve(common::backend(Seen::default())).await;
    let store = SessionStore::in_memory();
    let client = AdminClient::new(&base, store.clone());
    let mut auth = AuthController::new(store.clone());

    let failure = auth
        .login(&client, "admin@cauhec.org", "nope")
        .await
        .unwrap_err();

    assert_eq!(failure.message, "Invalid credentials");
    assert_eq!(auth.state(), &AuthState::Anonymous);
    assert!(store.read().token.is_none());
}

#[tokio::test]
async fn test_blank_credentials_send_nothing() {
    let seen = Seen::default();
    let base = common::serve(common::backend(seen.clone())).await;
    let store = SessionStore::in_memory();
    let client = AdminClient::new(&base, store.clone());
    let mut auth = AuthController::new(store);

    assert!(auth.login(&client, "  ", PASSWORD).await.is_err());
    assert_eq!(seen.count(), 0);
}

#[tokio::test]
async fn test_unreachable_backend_gives_connect_message() {
    let store = SessionStore::in_memory();
    let client = AdminClient::new(&common::unreachable_base_url().await, store.clone());
    let mut auth = AuthController::new(store);

    let failure = auth
        .login(&client, "admin@cauhec.org", PASSWORD)
        .await
        .unwrap_err();

    assert_eq!(failure.message, shared::auth::CANNOT_CONNECT_MESSAGE);
}

#[tokio::test]
async fn test_expired_token_ends_session_for_next_navigation() {
    let base = common::serve_fixed(
        "/admin/profiles",
        axum::http::StatusCode::UNAUTHORIZED,
        serde_json::json!({"status": "error", "message": "jwt expired"}),
    )
    .await;
    let store = common::signed_in_store();
    let client = AdminClient::new(&base, store.clone());
    let guard = RouteGuard::new(store.clone());
    assert_eq!(guard.check(&View::Profiles), GuardDecision::Enter);

    let _ = client.profiles().await;

    assert_eq!(
        guard.check(&View::Profiles),
        GuardDecision::Redirect(View::Login)
    );
    let mut auth = AuthController::new(store);
    assert_eq!(auth.restore(), &AuthState::Anonymous);
}

#[test]
fn test_logout_drives_redirect_to_login() {
    let store = common::signed_in_store();
    let mut auth = AuthController::new(store.clone());
    let current = Rc::new(RefCell::new(View::Users));
    let on_change = Rc::clone(&current);
    auth.subscribe(move |state| {
        let next = redirect_for(state, &on_change.borrow());
        if let Some(next) = next {
            *on_change.borrow_mut() = next;
        }
    });

    auth.restore();
    assert_eq!(*current.borrow(), View::Users);

    auth.logout();
    assert_eq!(*current.borrow(), View::Login);
    assert!(store.read().user.is_none());
}
