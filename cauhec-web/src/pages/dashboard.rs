use shared::pages::dashboard;
use yew::prelude::*;
use yew_icons::IconId;

use crate::components::chart::BarChart;
use crate::components::error_banner::ErrorBanner;
use crate::components::loading::TileSkeleton;
use crate::components::stat_card::StatCard;
use crate::hooks::use_page_load;

const TILE_ICONS: [IconId; 4] = [
    IconId::HeroiconsOutlineLink,
    IconId::HeroiconsOutlineClipboardDocumentList,
    IconId::HeroiconsOutlineUserGroup,
    IconId::HeroiconsOutlineAcademicCap,
];

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let page = use_page_load((), |client, ()| async move { dashboard::load(&client).await });
    let state = &*page.state;

    let Some(view) = state.data() else {
        return html! {
            <div class="space-y-6">
                <ErrorBanner message={state.error_message().map(str::to_string)} />
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2 xl:grid-cols-4">
                    { for (0..TILE_ICONS.len()).map(|_| html! { <TileSkeleton /> }) }
                </div>
            </div>
        };
    };

    html! {
        <div class="space-y-6">
            <ErrorBanner
                message={state.error_message().map(str::to_string)}
                fallback={state.is_fallback()}
            />
            <div class="grid grid-cols-1 gap-4 md:grid-cols-2 xl:grid-cols-4">
                { for view.tiles.iter().zip(TILE_ICONS).map(|(tile, icon)| html! {
                    <StatCard tile={tile.clone()} {icon} />
                }) }
            </div>
            <BarChart points={view.chart.clone()} peak={view.chart_peak()} />
        </div>
    }
}
