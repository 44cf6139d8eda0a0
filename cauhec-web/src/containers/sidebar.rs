use yew::{Html, classes, function_component, html};
use yew_icons::Icon;
use yew_router::prelude::{Link, use_route};

use crate::routes::MainRoute;

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let current = use_route::<MainRoute>();

    html! {
        <aside class="hidden w-64 shrink-0 bg-white shadow md:block">
            <div class="border-b p-6">
                <Link<MainRoute> to={MainRoute::Dashboard} classes="text-xl font-bold text-cauhec-red">
                    {"CAUHEC Connect"}
                </Link<MainRoute>>
                <p class="text-xs text-gray-500">{"Admin"}</p>
            </div>
            <nav class="flex flex-col gap-1 p-4">
                { for MainRoute::sidebar().map(|route| {
                    let active = route.is_active(current.as_ref());
                    let tone = if active {
                        "bg-red-50 text-cauhec-red"
                    } else {
                        "text-gray-600 hover:bg-gray-100"
                    };
                    let icon = route.nav_icon();
                    let label = route.title();
                    html! {
                        <Link<MainRoute> to={route} classes={classes!("flex", "items-center", "gap-3", "rounded-md", "px-3", "py-2", tone)}>
                            if let Some(icon_id) = icon {
                                <Icon {icon_id} class="h-5 w-5" />
                            }
                            <span>{ label }</span>
                        </Link<MainRoute>>
                    }
                }) }
            </nav>
        </aside>
    }
}
