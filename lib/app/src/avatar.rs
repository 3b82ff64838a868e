use leptos::prelude::*;

/// Component to display a user's picture, with a decorative border by default
#[component]
pub fn Avatar(
    #[prop(into)]
    src: String,
    #[prop(into, default = String::new())]
    alt: String,
    #[prop(default = true)]
    has_border: bool,
) -> impl IntoView {
    let class = match has_border {
        true => "avatar avatar-with-border",
        false => "avatar",
    };
    view! {
        <img class=class src=src alt=alt/>
    }
}
