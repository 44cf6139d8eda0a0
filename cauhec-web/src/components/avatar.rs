use yew::{Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub initials: String,
    pub color: &'static str,
    #[prop_or(false)]
    pub large: bool,
}

#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let size = if props.large {
        "h-20 w-20 text-2xl"
    } else {
        "h-10 w-10 text-sm"
    };
    html! {
        <div class={classes!(
            "flex", "shrink-0", "items-center", "justify-center", "rounded-full",
            "font-semibold", "text-white", size, props.color
        )}>
            { &props.initials }
        </div>
    }
}
