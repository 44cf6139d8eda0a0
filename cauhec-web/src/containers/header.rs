use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::{use_dispatch, use_selector};

use crate::api;
use crate::components::avatar::Avatar;
use crate::models::app_state::{AppState, notify_success};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: AttrValue,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let auth = use_selector(|state: &AppState| state.auth.clone());
    let dispatch = use_dispatch::<AppState>();

    let on_logout = Callback::from(move |_: MouseEvent| {
        api::with_auth(|auth| auth.logout());
        notify_success(&dispatch, "Logged out", "You have been signed out.");
    });

    let badge = auth.user().map(|user| {
        let name = user.display_name();
        let initials = shared::view::avatar_label(&name, &user.email);
        let color = shared::view::color_for(user.id, shared::view::ColorRole::Admin);
        html! {
            <div class="flex items-center gap-3">
                <Avatar {initials} {color} />
                <div class="hidden text-right sm:block">
                    <p class="text-sm font-medium">{ name }</p>
                    <p class="text-xs text-gray-500">{ &user.email }</p>
                </div>
            </div>
        }
    });

    html! {
        <header class="flex items-center justify-between border-b bg-white px-6 py-4">
            <div>
                <h1 class="text-2xl font-bold">{ props.title.clone() }</h1>
                if !props.subtitle.is_empty() {
                    <p class="text-gray-500">{ props.subtitle.clone() }</p>
                }
            </div>
            <div class="flex items-center gap-4">
                { badge.unwrap_or_default() }
                <button class="flex items-center gap-2 rounded-md px-3 py-2 text-gray-600 hover:bg-gray-100" onclick={on_logout}>
                    <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="h-5 w-5" />
                    <span>{"Logout"}</span>
                </button>
            </div>
        </header>
    }
}
