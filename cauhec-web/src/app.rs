use shared::{AuthState, View, redirect_for};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::{use_dispatch, use_selector};

use crate::api;
use crate::components::loading::Loading;
use crate::components::toaster::Toaster;
use crate::models::app_state::AppState;
use crate::routes::{self, MainRoute};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[function_component(App)]
pub fn app() -> Html {
    let dispatch = use_dispatch::<AppState>();
    let auth = use_selector(|state: &AppState| state.auth.clone());

    use_effect_with((), move |_| {
        api::with_auth(|controller| {
            let dispatch = dispatch.clone();
            controller.subscribe(move |state: &AuthState| {
                let dispatch = dispatch.clone();
                let state = state.clone();
                // Listeners run while the controller is borrowed.
                spawn_local(async move {
                    dispatch.reduce_mut(|app| app.auth = state);
                });
            });
            let restored = controller.restore();
            log(&format!("session restored: authenticated={}", restored.is_authenticated()));
        });
        || ()
    });

    if auth.is_pending() {
        return html! { <Loading /> };
    }

    html! {
        <BrowserRouter>
            <AuthRedirect />
            <Switch<MainRoute> render={routes::switch} />
            <Toaster />
        </BrowserRouter>
    }
}

/// Keeps the visible route consistent with the auth state.
#[function_component(AuthRedirect)]
fn auth_redirect() -> Html {
    let auth = use_selector(|state: &AppState| state.auth.clone());
    let route = use_route::<MainRoute>();
    let navigator = use_navigator();

    use_effect_with(((*auth).clone(), route), move |(auth, route)| {
        let target = route
            .as_ref()
            .and_then(|route| redirect_for(auth, &View::from(route)));
        if let (Some(target), Some(navigator)) = (target, navigator) {
            navigator.replace(&MainRoute::from(target));
        }
        || ()
    });

    html! {}
}
