use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="flex min-h-screen flex-col items-center justify-center gap-4 bg-gray-50">
            <h1 class="text-6xl font-bold text-cauhec-red">{"404"}</h1>
            <p class="text-gray-500">{"The page you are looking for does not exist."}</p>
            <Link<MainRoute> to={MainRoute::Dashboard} classes="text-cauhec-red underline">
                {"Back to the dashboard"}
            </Link<MainRoute>>
        </div>
    }
}
