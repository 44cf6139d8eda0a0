use gloo_timers::callback::Timeout;
use yew::{
    Callback, Html, MouseEvent, Properties, classes, function_component, html, use_effect_with,
};
use yew_icons::{Icon, IconId};
use yewdux::prelude::{use_dispatch, use_selector};

use crate::models::app_state::{AppState, Toast, ToastKind};

const DISMISS_AFTER_MS: u32 = 4_000;

/// Stack of transient notifications in the corner of the screen.
#[function_component(Toaster)]
pub fn toaster() -> Html {
    let toasts = use_selector(|state: &AppState| state.toasts.clone());
    html! {
        <div class="fixed bottom-4 right-4 z-50 flex w-80 flex-col gap-2">
            { for toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let dispatch = use_dispatch::<AppState>();
    let id = props.toast.id;

    {
        let dispatch = dispatch.clone();
        use_effect_with(id, move |&id| {
            let timeout = Timeout::new(DISMISS_AFTER_MS, move || {
                dispatch.reduce_mut(|state| state.dismiss_toast(id));
            });
            move || drop(timeout)
        });
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        dispatch.reduce_mut(|state| state.dismiss_toast(id));
    });
    let (tone, icon) = match props.toast.kind {
        ToastKind::Success => ("border-green-500", IconId::HeroiconsOutlineCheckCircle),
        ToastKind::Error => ("border-red-500", IconId::HeroiconsOutlineExclamationCircle),
    };

    html! {
        <div class={classes!("flex", "items-start", "gap-3", "rounded-md", "border-l-4", "bg-white", "p-4", "shadow-lg", tone)}>
            <Icon icon_id={icon} class="h-5 w-5 shrink-0" />
            <div class="flex-1">
                <p class="font-semibold">{ &props.toast.title }</p>
                <p class="text-sm text-gray-600">{ &props.toast.message }</p>
            </div>
            <button class="text-gray-400 hover:text-gray-600" {onclick}>
                <Icon icon_id={IconId::HeroiconsOutlineXMark} class="h-4 w-4" />
            </button>
        </div>
    }
}
