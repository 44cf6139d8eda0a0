use shared::pages::{DetailSection, user_detail};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;

use crate::components::avatar::Avatar;
use crate::components::error_banner::ErrorBanner;
use crate::components::loading::Loading;
use crate::hooks::use_page_load;

#[derive(Properties, PartialEq)]
pub struct UserDetailPageProps {
    pub id: String,
}

#[function_component(UserDetailPage)]
pub fn user_detail_page(props: &UserDetailPageProps) -> Html {
    let page = use_page_load(props.id.clone(), |client, id| async move {
        user_detail::load(&client, &id).await
    });
    let navigator = use_navigator();
    let state = &*page.state;

    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(nav) = &navigator {
            nav.back();
        }
    });

    let back = html! {
        <button class="mb-6 flex items-center gap-2 text-gray-600 hover:text-gray-900" onclick={on_back}>
            <Icon icon_id={IconId::HeroiconsOutlineArrowLeft} class="h-4 w-4" />
            {"Back"}
        </button>
    };

    let Some(view) = state.data() else {
        return html! {
            <div>
                { back }
                <Loading />
            </div>
        };
    };

    html! {
        <div>
            { back }
            <ErrorBanner
                message={state.error_message().map(str::to_string)}
                fallback={state.is_fallback()}
            />
            <div class="mb-6 flex items-center gap-6 rounded-lg bg-white p-6 shadow">
                <Avatar initials={view.person.initials.clone()} color={view.person.color} large=true />
                <div>
                    <h2 class="text-2xl font-bold">{ &view.person.name }</h2>
                    <p class="text-gray-500">{ &view.person.email }</p>
                    <div class="mt-2 flex gap-4 text-sm text-gray-500">
                        <span class="rounded-full bg-gray-100 px-2 py-1">{ &view.role }</span>
                        <span>{ format!("Joined {}", view.joined) }</span>
                    </div>
                </div>
            </div>
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                { for view.sections.iter().map(section) }
            </div>
        </div>
    }
}

fn section(section: &DetailSection) -> Html {
    html! {
        <div class="rounded-lg bg-white p-6 shadow">
            <h3 class="mb-4 text-lg font-semibold">{ section.title }</h3>
            <dl class="space-y-3">
                { for section.fields.iter().map(|(label, value)| html! {
                    <div class="flex justify-between gap-4">
                        <dt class="text-sm text-gray-500">{ *label }</dt>
                        <dd class="text-right text-sm font-medium">{ value }</dd>
                    </div>
                }) }
            </dl>
        </div>
    }
}
