use yew::{AttrValue, Children, Html, Properties, function_component, html};

use crate::containers::header::Header;
use crate::containers::sidebar::Sidebar;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: AttrValue,
}

/// Sidebar, page header, and content area shared by every signed-in page.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex min-h-screen bg-gray-50">
            <Sidebar />
            <div class="flex flex-1 flex-col">
                <Header title={props.title.clone()} subtitle={props.subtitle.clone()} />
                <main class="flex-1 p-6">
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}
