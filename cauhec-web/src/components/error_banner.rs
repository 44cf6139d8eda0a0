use yew::{Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
    /// The data below the banner is a stand-in.
    #[prop_or(false)]
    pub fallback: bool,
}

/// Inline error shown above a page whose load failed.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let Some(message) = props.message.as_ref() else {
        return html! {};
    };
    html! {
        <div class="mb-6 flex items-start gap-3 rounded-md bg-red-50 p-4 text-red-600" role="alert">
            <Icon icon_id={IconId::HeroiconsOutlineExclamationTriangle} class="h-5 w-5 shrink-0" />
            <div>
                <p>{ message }</p>
                if props.fallback {
                    <p class="mt-1 text-sm text-red-500">{"Showing placeholder data."}</p>
                }
            </div>
        </div>
    }
}
