use shared::pages::{ConnectionView, PersonCell, connections};
use yew::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::error_banner::ErrorBanner;
use crate::components::loading::TableSkeleton;
use crate::hooks::use_page_load;

#[function_component(ConnectionsPage)]
pub fn connections_page() -> Html {
    let page = use_page_load((), |client, ()| async move { connections::load(&client).await });
    let state = &*page.state;

    let body = match state.data() {
        None if state.is_loading() => html! { <TableSkeleton columns={5} /> },
        Some(rows) if !rows.is_empty() => html! {
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50 text-left text-xs uppercase text-gray-500">
                    <tr>
                        <th class="px-6 py-3">{"Student"}</th>
                        <th class="px-6 py-3">{"Preceptor"}</th>
                        <th class="px-6 py-3">{"Status"}</th>
                        <th class="px-6 py-3">{"Requested"}</th>
                        <th class="px-6 py-3">{"Connected"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200">
                    { for rows.iter().map(connection_row) }
                </tbody>
            </table>
        },
        _ => html! { <p class="p-6 text-center text-gray-500">{"No connections found."}</p> },
    };

    html! {
        <div>
            <ErrorBanner message={state.error_message().map(str::to_string)} />
            <p class="mb-4 text-sm text-gray-500">{ format!("{} connections", state.len()) }</p>
            <div class="overflow-x-auto rounded-lg bg-white shadow">{ body }</div>
        </div>
    }
}

fn person(cell: &PersonCell) -> Html {
    html! {
        <div class="flex items-center gap-3">
            <Avatar initials={cell.initials.clone()} color={cell.color} />
            <div>
                <p class="font-medium">{ &cell.name }</p>
                <p class="text-sm text-gray-500">{ &cell.email }</p>
            </div>
        </div>
    }
}

fn connection_row(row: &ConnectionView) -> Html {
    let status = row.status.clone().unwrap_or_else(|| "pending".to_string());
    let tone = if status.eq_ignore_ascii_case("connected") || status.eq_ignore_ascii_case("accepted") {
        "bg-green-100 text-green-800"
    } else {
        "bg-yellow-100 text-yellow-800"
    };
    html! {
        <tr class="hover:bg-gray-50">
            <td class="px-6 py-4">{ person(&row.student) }</td>
            <td class="px-6 py-4">{ person(&row.preceptor) }</td>
            <td class="px-6 py-4">
                <span class={classes!("rounded-full", "px-2", "py-1", "text-xs", "font-medium", tone)}>
                    { status }
                </span>
            </td>
            <td class="px-6 py-4 text-sm">{ &row.requested }</td>
            <td class="px-6 py-4 text-sm">{ &row.connected }</td>
        </tr>
    }
}
