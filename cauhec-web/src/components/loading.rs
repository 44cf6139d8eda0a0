use yew::{Html, Properties, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex min-h-screen items-center justify-center bg-gray-50">
            <div class="flex flex-col items-center gap-3 text-gray-500">
                <span class="h-10 w-10 animate-spin rounded-full border-4 border-gray-200 border-t-cauhec-red"></span>
                <span>{"Loading"}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TableSkeletonProps {
    #[prop_or(5)]
    pub rows: usize,
    #[prop_or(4)]
    pub columns: usize,
}

/// Grey placeholder rows shown while a table loads.
#[function_component(TableSkeleton)]
pub fn table_skeleton(props: &TableSkeletonProps) -> Html {
    html! {
        <div class="animate-pulse rounded-md bg-white shadow">
            { for (0..props.rows).map(|_| html! {
                <div class="flex items-center gap-4 border-b p-4">
                    <div class="h-10 w-10 rounded-full bg-gray-200"></div>
                    { for (0..props.columns).map(|_| html! {
                        <div class="h-4 flex-1 rounded bg-gray-200"></div>
                    }) }
                </div>
            }) }
        </div>
    }
}

#[function_component(TileSkeleton)]
pub fn tile_skeleton() -> Html {
    html! {
        <div class="animate-pulse rounded-md bg-white p-6 shadow">
            <div class="mb-3 h-4 w-1/2 rounded bg-gray-200"></div>
            <div class="mb-3 h-8 w-1/3 rounded bg-gray-200"></div>
            <div class="h-3 w-2/3 rounded bg-gray-200"></div>
        </div>
    }
}
