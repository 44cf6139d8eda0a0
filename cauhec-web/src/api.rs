use std::cell::RefCell;
use std::rc::Rc;

use once_cell::unsync::OnceCell;
use shared::{AdminClient, AuthController, SessionStore};
use yew_router::Routable;

use crate::config::FrontendConfig;
use crate::routes::MainRoute;
use crate::storage::LocalStorageBackend;

thread_local! {
    static SESSION: OnceCell<SessionStore> = const { OnceCell::new() };
    static SHARED_CLIENT: OnceCell<AdminClient> = const { OnceCell::new() };
    static AUTH: OnceCell<Rc<RefCell<AuthController>>> = const { OnceCell::new() };
}

/// The page-wide session over `localStorage`.
pub fn session() -> SessionStore {
    SESSION.with(|cell| {
        cell.get_or_init(|| SessionStore::new(LocalStorageBackend))
            .clone()
    })
}

/// The page-wide API client. A 401 on any authenticated call reloads the
/// app at the login route.
pub fn client() -> AdminClient {
    SHARED_CLIENT.with(|cell| {
        cell.get_or_init(|| {
            let config = FrontendConfig::new().client_config();
            AdminClient::from_config(&config, session()).with_unauthorized_hook(force_login)
        })
        .clone()
    })
}

/// Runs `f` against the page-wide auth controller.
pub fn with_auth<R>(f: impl FnOnce(&mut AuthController) -> R) -> R {
    let auth = AUTH.with(|cell| {
        Rc::clone(cell.get_or_init(|| Rc::new(RefCell::new(AuthController::new(session())))))
    });
    let mut controller = auth.borrow_mut();
    f(&mut controller)
}

fn force_login() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let login = MainRoute::Login.to_path();
    if let Err(err) = window.location().set_href(&login) {
        web_sys::console::error_1(&err);
    }
}
