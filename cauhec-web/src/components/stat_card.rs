use shared::pages::StatTile;
use yew::{Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub tile: StatTile,
    pub icon: IconId,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let change_class = if props.tile.change.starts_with('-') {
        "text-red-500"
    } else {
        "text-green-500"
    };
    html! {
        <div class="rounded-md bg-white p-6 shadow">
            <div class="flex items-start justify-between">
                <div>
                    <h3 class="mb-1 font-medium text-gray-600">{ props.tile.title }</h3>
                    <p class="text-3xl font-bold">{ &props.tile.value }</p>
                    <p class={classes!("mt-2", "text-sm", change_class)}>
                        { format!("{} vs last month", props.tile.change) }
                    </p>
                </div>
                <div class="rounded-full bg-red-50 p-3 text-cauhec-red">
                    <Icon icon_id={props.icon} class="h-6 w-6" />
                </div>
            </div>
        </div>
    }
}
