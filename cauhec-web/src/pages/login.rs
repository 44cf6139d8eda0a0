use shared::auth::check_credentials;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_dispatch;

use crate::api;
use crate::models::app_state::{AppState, notify_success};
use crate::routes::MainRoute;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let dispatch = use_dispatch::<AppState>();

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *loading {
                return;
            }
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            if let Err(failure) = check_credentials(&email_value, &password_value) {
                error.set(Some(failure.message));
                return;
            }
            loading.set(true);
            error.set(None);

            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let outcome = api::client().login(&email_value, &password_value).await;
                match api::with_auth(|auth| auth.apply_login(outcome)) {
                    Ok(user) => {
                        notify_success(
                            &dispatch,
                            "Welcome back",
                            &format!("Signed in as {}", user.display_name()),
                        );
                        if let Some(nav) = navigator {
                            nav.replace(&MainRoute::Dashboard);
                        }
                    }
                    Err(failure) => error.set(Some(failure.message)),
                }
                loading.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = *loading;

    html! {
        <div class="flex min-h-screen items-center justify-center bg-gray-50">
            <div class="w-full max-w-md rounded-lg bg-white p-8 shadow-lg">
                <div class="mb-6 text-center">
                    <h1 class="text-3xl font-bold text-cauhec-red">{"CAUHEC Connect"}</h1>
                    <p class="mt-2 text-gray-500">{"Sign in to the admin dashboard"}</p>
                </div>
                <form class="space-y-4" onsubmit={onsubmit}>
                    if let Some(message) = &*error {
                        <div class="rounded-md border border-red-200 bg-red-50 p-3 text-sm text-red-700">
                            { message.clone() }
                        </div>
                    }
                    <div>
                        <label class="mb-1 block text-sm font-medium" for="email">{"Email"}</label>
                        <input
                            id="email"
                            class="w-full rounded-md border px-3 py-2"
                            type="email"
                            autocomplete="username"
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div>
                        <label class="mb-1 block text-sm font-medium" for="password">{"Password"}</label>
                        <input
                            id="password"
                            class="w-full rounded-md border px-3 py-2"
                            type="password"
                            autocomplete="current-password"
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <button
                        class="w-full rounded-md bg-cauhec-red py-2 font-semibold text-white disabled:opacity-60"
                        type="submit"
                        disabled={is_busy}
                    >
                        { if is_busy { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
