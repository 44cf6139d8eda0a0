use shared::models::UserRole;
use shared::pages::{UserView, users};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::avatar::Avatar;
use crate::components::error_banner::ErrorBanner;
use crate::components::loading::TableSkeleton;
use crate::hooks::use_page_load;
use crate::routes::MainRoute;

const TABS: [(UserRole, &str); 2] = [
    (UserRole::Student, "Students"),
    (UserRole::Preceptor, "Preceptors"),
];

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let role = use_state(UserRole::default);
    let page = use_page_load(*role, |client, role| async move {
        users::load(&client, role).await
    });
    let state = &*page.state;

    let tabs = TABS.into_iter().map(|(tab, label)| {
        let selected = *role == tab;
        let onclick = {
            let role = role.clone();
            Callback::from(move |_: MouseEvent| role.set(tab))
        };
        let tone = if selected {
            "border-cauhec-red text-cauhec-red"
        } else {
            "border-transparent text-gray-500 hover:text-gray-700"
        };
        html! {
            <button class={classes!("border-b-2", "px-4", "py-2", "font-medium", tone)} {onclick}>
                { label }
            </button>
        }
    });

    let affiliation = match *role {
        UserRole::Student => "School",
        UserRole::Preceptor => "Location",
    };

    let body = match state.data() {
        None if state.is_loading() => html! { <TableSkeleton columns={4} /> },
        Some(rows) if !rows.is_empty() => html! {
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50 text-left text-xs uppercase text-gray-500">
                    <tr>
                        <th class="px-6 py-3">{"Name"}</th>
                        <th class="px-6 py-3">{ affiliation }</th>
                        <th class="px-6 py-3">{"Joined"}</th>
                        <th class="px-6 py-3"></th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200">
                    { for rows.iter().map(user_row) }
                </tbody>
            </table>
        },
        _ => html! {
            <p class="p-6 text-center text-gray-500">
                { format!("No {}s found.", *role) }
            </p>
        },
    };

    html! {
        <div>
            <ErrorBanner message={state.error_message().map(str::to_string)} />
            <div class="mb-4 flex border-b">{ for tabs }</div>
            <div class="overflow-x-auto rounded-lg bg-white shadow">{ body }</div>
        </div>
    }
}

fn user_row(row: &UserView) -> Html {
    let to = MainRoute::UserDetail {
        id: row.id().to_string(),
    };
    html! {
        <tr class="hover:bg-gray-50">
            <td class="px-6 py-4">
                <div class="flex items-center gap-3">
                    <Avatar initials={row.person.initials.clone()} color={row.person.color} />
                    <div>
                        <p class="font-medium">{ &row.person.name }</p>
                        <p class="text-sm text-gray-500">{ &row.person.email }</p>
                    </div>
                </div>
            </td>
            <td class="px-6 py-4 text-sm">{ &row.school }</td>
            <td class="px-6 py-4 text-sm">{ &row.joined }</td>
            <td class="px-6 py-4 text-right">
                <Link<MainRoute> {to} classes="text-sm text-cauhec-red hover:underline">
                    {"View"}
                </Link<MainRoute>>
            </td>
        </tr>
    }
}
