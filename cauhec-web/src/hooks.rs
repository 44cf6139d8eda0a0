use std::future::Future;

use shared::{AdminClient, FetchState, LoadGeneration};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_dispatch;

use crate::api;
use crate::models::app_state::{AppState, notify_error};

/// State of a page load plus a way to run it again.
pub struct PageLoad<T: 'static> {
    pub state: UseStateHandle<FetchState<T>>,
    pub reload: Callback<()>,
}

/// Loads page data whenever `deps` change.
///
/// Every run resets the state to `Loading`. Only the newest run may publish
/// its result, and nothing is published after the component unmounts.
/// Failures also raise an error toast.
#[hook]
pub fn use_page_load<T, D, F, Fut>(deps: D, load: F) -> PageLoad<T>
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(AdminClient, D) -> Fut + 'static,
    Fut: Future<Output = FetchState<T>> + 'static,
{
    let state = use_state(FetchState::<T>::default);
    let generation = use_memo((), |_| LoadGeneration::default());
    let round = use_state(|| 0_u32);
    let dispatch = use_dispatch::<AppState>();

    {
        let state = state.clone();
        let generation = generation.clone();
        use_effect_with((deps, *round), move |(deps, _)| {
            state.set(FetchState::Loading);
            let ticket = generation.begin();
            let pending = load(api::client(), deps.clone());
            spawn_local(async move {
                let result = pending.await;
                if !ticket.is_current() {
                    return;
                }
                if let Some(message) = result.error_message() {
                    notify_error(&dispatch, "Error", message);
                }
                state.set(result);
            });
            move || generation.invalidate()
        });
    }

    let reload = {
        let round = round.clone();
        Callback::from(move |()| round.set(*round + 1))
    };

    PageLoad { state, reload }
}
