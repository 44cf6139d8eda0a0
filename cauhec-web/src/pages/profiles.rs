use shared::models::CreateAdminRequest;
use shared::pages::{ProfileView, profiles};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::Dispatch;
use yewdux::prelude::use_dispatch;

use crate::api;
use crate::components::avatar::Avatar;
use crate::components::error_banner::ErrorBanner;
use crate::components::loading::TableSkeleton;
use crate::hooks::use_page_load;
use crate::models::app_state::{AppState, notify_error, notify_success};

#[function_component(ProfilesPage)]
pub fn profiles_page() -> Html {
    let page = use_page_load((), |client, ()| async move { profiles::load(&client).await });
    let creating = use_state(|| false);
    let dispatch = use_dispatch::<AppState>();
    let state = &*page.state;

    let toggle_create = {
        let creating = creating.clone();
        Callback::from(move |_: MouseEvent| creating.set(!*creating))
    };
    let on_created = {
        let creating = creating.clone();
        let reload = page.reload.clone();
        Callback::from(move |()| {
            creating.set(false);
            reload.emit(());
        })
    };
    let on_delete = {
        let reload = page.reload.clone();
        Callback::from(move |id: i64| delete_profile(id, dispatch.clone(), reload.clone()))
    };

    let body = match state.data() {
        None if state.is_loading() => html! { <TableSkeleton columns={4} /> },
        Some(rows) if !rows.is_empty() => html! {
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50 text-left text-xs uppercase text-gray-500">
                    <tr>
                        <th class="px-6 py-3">{"Profile"}</th>
                        <th class="px-6 py-3">{"Role"}</th>
                        <th class="px-6 py-3">{"Created"}</th>
                        <th class="px-6 py-3"></th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200">
                    { for rows.iter().map(|row| profile_row(row, &on_delete)) }
                </tbody>
            </table>
        },
        _ => html! { <p class="p-6 text-center text-gray-500">{"No profiles found."}</p> },
    };

    html! {
        <div>
            <ErrorBanner message={state.error_message().map(str::to_string)} />
            <div class="mb-6 flex justify-end">
                <button class="flex items-center gap-2 rounded-md bg-cauhec-red px-4 py-2 text-white" onclick={toggle_create}>
                    <Icon icon_id={IconId::HeroiconsOutlinePlus} class="h-4 w-4" />
                    {"Add Admin"}
                </button>
            </div>
            if *creating {
                <CreateAdminForm on_created={on_created} />
            }
            <div class="overflow-x-auto rounded-lg bg-white shadow">{ body }</div>
        </div>
    }
}

fn delete_profile(id: i64, dispatch: Dispatch<AppState>, reload: Callback<()>) {
    spawn_local(async move {
        match profiles::delete(&api::client(), id).await {
            Ok(()) => {
                notify_success(&dispatch, "Profile deleted", &format!("Profile {id} was removed"));
                reload.emit(());
            }
            Err(err) => notify_error(&dispatch, "Error", &err.user_message()),
        }
    });
}

fn profile_row(row: &ProfileView, on_delete: &Callback<i64>) -> Html {
    let id = row.id();
    let onclick = on_delete.reform(move |_: MouseEvent| id);
    let name = if row.person.name.is_empty() {
        row.person.email.clone()
    } else {
        row.person.name.clone()
    };
    html! {
        <tr class="hover:bg-gray-50">
            <td class="px-6 py-4">
                <div class="flex items-center gap-3">
                    <Avatar initials={row.person.initials.clone()} color={row.person.color} />
                    <div>
                        <p class="font-medium">{ name }</p>
                        <p class="text-sm text-gray-500">{ &row.person.email }</p>
                    </div>
                </div>
            </td>
            <td class="px-6 py-4 text-sm capitalize">{ &row.role }</td>
            <td class="px-6 py-4 text-sm">{ &row.created }</td>
            <td class="px-6 py-4 text-right">
                <button class="text-gray-400 hover:text-red-600" title="Delete profile" {onclick}>
                    <Icon icon_id={IconId::HeroiconsOutlineTrash} class="h-5 w-5" />
                </button>
            </td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
struct CreateAdminFormProps {
    on_created: Callback<()>,
}

#[function_component(CreateAdminForm)]
fn create_admin_form(props: &CreateAdminFormProps) -> Html {
    let draft = use_state(|| CreateAdminRequest {
        email: String::new(),
        password: String::new(),
        first_name: None,
        last_name: None,
    });
    let saving = use_state(|| false);
    let dispatch = use_dispatch::<AppState>();

    let field = |apply: fn(&mut CreateAdminRequest, String)| {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*draft).clone();
                apply(&mut next, input.value());
                draft.set(next);
            }
        })
    };
    let on_first = field(|draft, value| draft.first_name = Some(value).filter(|v| !v.trim().is_empty()));
    let on_last = field(|draft, value| draft.last_name = Some(value).filter(|v| !v.trim().is_empty()));
    let on_email = field(|draft, value| draft.email = value);
    let on_password = field(|draft, value| draft.password = value);

    let onsubmit = {
        let draft = draft.clone();
        let saving = saving.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *saving {
                return;
            }
            saving.set(true);
            let request = (*draft).clone();
            let saving = saving.clone();
            let dispatch = dispatch.clone();
            let on_created = on_created.clone();
            spawn_local(async move {
                match profiles::create(&api::client(), &request).await {
                    Ok(created) => {
                        notify_success(&dispatch, "Admin created", &created.person.email);
                        on_created.emit(());
                    }
                    Err(err) => notify_error(&dispatch, "Error", &err.user_message()),
                }
                saving.set(false);
            });
        })
    };

    let input_class = "rounded-md border px-3 py-2";
    html! {
        <form class="mb-6 grid grid-cols-1 gap-4 rounded-lg bg-white p-6 shadow md:grid-cols-2" {onsubmit}>
            <input class={input_class} placeholder="First name"
                value={draft.first_name.clone().unwrap_or_default()} oninput={on_first} />
            <input class={input_class} placeholder="Last name"
                value={draft.last_name.clone().unwrap_or_default()} oninput={on_last} />
            <input class={input_class} type="email" placeholder="Email"
                value={draft.email.clone()} oninput={on_email} />
            <input class={input_class} type="password" placeholder="Password (8+ characters)"
                value={draft.password.clone()} oninput={on_password} />
            <button
                class="rounded-md bg-cauhec-red px-4 py-2 text-white disabled:opacity-60 md:col-span-2"
                type="submit"
                disabled={*saving}
            >
                { if *saving { "Creating..." } else { "Create admin" } }
            </button>
        </form>
    }
}
