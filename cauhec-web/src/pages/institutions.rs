use shared::models::{InstitutionFilter, NewInstitution};
use shared::pages::{InstitutionView, institutions};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_dispatch;

use crate::api;
use crate::components::avatar::Avatar;
use crate::components::error_banner::ErrorBanner;
use crate::components::loading::TableSkeleton;
use crate::hooks::use_page_load;
use crate::models::app_state::{AppState, notify_error, notify_success};

const KINDS: [(&str, &str); 3] = [
    ("schoolLocations", "School Locations"),
    ("clinicalSites", "Clinical Sites"),
    ("partners", "Partner Organizations"),
];

const STATES: [(&str, &str); 4] = [
    ("", "All States"),
    ("CA", "California"),
    ("NY", "New York"),
    ("TX", "Texas"),
];

fn select_value(event: &Event) -> Option<String> {
    event
        .target_dyn_into::<HtmlSelectElement>()
        .map(|select| select.value())
}

fn input_value(event: &InputEvent) -> Option<String> {
    event
        .target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
}

#[function_component(InstitutionsPage)]
pub fn institutions_page() -> Html {
    let filter = use_state(|| InstitutionFilter {
        kind: KINDS[0].0.to_string(),
        ..InstitutionFilter::default()
    });
    let search = use_state(String::new);
    let adding = use_state(|| false);
    let page = use_page_load((*filter).clone(), |client, filter| async move {
        institutions::load(&client, &filter).await
    });
    let state = &*page.state;

    let on_kind = {
        let filter = filter.clone();
        Callback::from(move |event: Event| {
            if let Some(kind) = select_value(&event) {
                filter.set(InstitutionFilter {
                    kind,
                    ..(*filter).clone()
                });
            }
        })
    };
    let on_state = {
        let filter = filter.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = select_value(&event) {
                filter.set(InstitutionFilter {
                    state: value,
                    ..(*filter).clone()
                });
            }
        })
    };
    let on_search_input = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                search.set(value);
            }
        })
    };
    let on_search = {
        let filter = filter.clone();
        let search = search.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            filter.set(InstitutionFilter {
                search: (*search).clone(),
                ..(*filter).clone()
            });
        })
    };
    let toggle_add = {
        let adding = adding.clone();
        Callback::from(move |_: MouseEvent| adding.set(!*adding))
    };
    let on_added = {
        let adding = adding.clone();
        let reload = page.reload.clone();
        Callback::from(move |()| {
            adding.set(false);
            reload.emit(());
        })
    };

    let body = match state.data() {
        None if state.is_loading() => html! { <TableSkeleton columns={4} /> },
        Some(rows) if !rows.is_empty() => html! {
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50 text-left text-xs uppercase text-gray-500">
                    <tr>
                        <th class="px-6 py-3">{"Institution"}</th>
                        <th class="px-6 py-3">{"Type"}</th>
                        <th class="px-6 py-3">{"Location"}</th>
                        <th class="px-6 py-3">{"Added"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200">
                    { for rows.iter().map(institution_row) }
                </tbody>
            </table>
        },
        _ if filter.state.is_empty() => html! {
            <p class="p-10 text-center text-gray-500">{"Please select a state to view locations"}</p>
        },
        _ => html! { <p class="p-10 text-center text-gray-500">{"No institutions found."}</p> },
    };

    html! {
        <div>
            <ErrorBanner message={state.error_message().map(str::to_string)} />
            <div class="mb-8 flex flex-wrap items-center justify-between gap-4">
                <div class="flex items-center gap-4">
                    <div class="flex items-center gap-2 rounded-md border bg-white px-4 py-2">
                        <Icon icon_id={IconId::HeroiconsOutlineFunnel} class="h-4 w-4" />
                        <span class="text-sm">{"Filters"}</span>
                    </div>
                    <select class="w-48 rounded-md border bg-white px-3 py-2" onchange={on_kind}>
                        { for KINDS.into_iter().map(|(value, label)| html! {
                            <option {value} selected={filter.kind == value}>{ label }</option>
                        }) }
                    </select>
                    <select class="w-48 rounded-md border bg-white px-3 py-2" onchange={on_state}>
                        { for STATES.into_iter().map(|(value, label)| html! {
                            <option {value} selected={filter.state == value}>{ label }</option>
                        }) }
                    </select>
                </div>
                <div class="flex items-center gap-4">
                    <form class="relative" onsubmit={on_search}>
                        <input
                            class="w-72 rounded-md border py-2 pl-3 pr-3"
                            placeholder="Search schools..."
                            value={(*search).clone()}
                            oninput={on_search_input}
                        />
                    </form>
                    <button class="flex items-center gap-2 rounded-md bg-cauhec-red px-4 py-2 text-white" onclick={toggle_add}>
                        <Icon icon_id={IconId::HeroiconsOutlinePlus} class="h-4 w-4" />
                        {"Add Institution"}
                    </button>
                </div>
            </div>
            if *adding {
                <AddInstitutionForm on_added={on_added} />
            }
            <div class="overflow-x-auto rounded-lg bg-white shadow">{ body }</div>
        </div>
    }
}

fn institution_row(row: &InstitutionView) -> Html {
    html! {
        <tr class="hover:bg-gray-50">
            <td class="px-6 py-4">
                <div class="flex items-center gap-3">
                    <Avatar initials={row.initials.clone()} color={row.color} />
                    <span class="font-medium">{ &row.name }</span>
                </div>
            </td>
            <td class="px-6 py-4 text-sm">{ &row.kind }</td>
            <td class="px-6 py-4 text-sm">{ &row.location }</td>
            <td class="px-6 py-4 text-sm">{ &row.added }</td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
struct AddInstitutionFormProps {
    on_added: Callback<()>,
}

#[function_component(AddInstitutionForm)]
fn add_institution_form(props: &AddInstitutionFormProps) -> Html {
    let draft = use_state(|| NewInstitution {
        kind: KINDS[0].0.to_string(),
        ..NewInstitution::default()
    });
    let saving = use_state(|| false);
    let dispatch = use_dispatch::<AppState>();

    let field = |apply: fn(&mut NewInstitution, String)| {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                let mut next = (*draft).clone();
                apply(&mut next, value);
                draft.set(next);
            }
        })
    };
    let on_name = field(|draft, value| draft.name = value);
    let on_city = field(|draft, value| draft.city = value);
    let on_state = field(|draft, value| draft.state = value);
    let on_address = field(|draft, value| {
        draft.address = Some(value).filter(|value| !value.trim().is_empty());
    });
    let on_kind = {
        let draft = draft.clone();
        Callback::from(move |event: Event| {
            if let Some(kind) = select_value(&event) {
                draft.set(NewInstitution {
                    kind,
                    ..(*draft).clone()
                });
            }
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let saving = saving.clone();
        let on_added = props.on_added.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *saving {
                return;
            }
            saving.set(true);
            let institution = (*draft).clone();
            let saving = saving.clone();
            let dispatch = dispatch.clone();
            let on_added = on_added.clone();
            spawn_local(async move {
                match institutions::add(&api::client(), &institution).await {
                    Ok(added) => {
                        notify_success(&dispatch, "Institution added", &added.name);
                        on_added.emit(());
                    }
                    Err(err) => notify_error(&dispatch, "Error", &err.user_message()),
                }
                saving.set(false);
            });
        })
    };

    let input_class = "rounded-md border px-3 py-2";
    html! {
        <form class="mb-6 grid grid-cols-1 gap-4 rounded-lg bg-white p-6 shadow md:grid-cols-3" {onsubmit}>
            <input class={input_class} placeholder="Name" value={draft.name.clone()} oninput={on_name} />
            <select class={input_class} onchange={on_kind}>
                { for KINDS.into_iter().map(|(value, label)| html! {
                    <option {value} selected={draft.kind == value}>{ label }</option>
                }) }
            </select>
            <input class={input_class} placeholder="City" value={draft.city.clone()} oninput={on_city} />
            <input class={input_class} placeholder="State" value={draft.state.clone()} oninput={on_state} />
            <input
                class={input_class}
                placeholder="Address (optional)"
                value={draft.address.clone().unwrap_or_default()}
                oninput={on_address}
            />
            <button
                class="rounded-md bg-cauhec-red px-4 py-2 text-white disabled:opacity-60"
                type="submit"
                disabled={*saving}
            >
                { if *saving { "Saving..." } else { "Save institution" } }
            </button>
        </form>
    }
}
