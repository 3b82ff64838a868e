use leptos::prelude::*;

use crate::constants::LOGO_ICON_PATH;

#[component]
pub fn InternalErrorIcon(#[prop(default = "error-icon-size")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/errors/internal_error.svg" class=class/>
    }
}

#[component]
pub fn InvalidRequestIcon(#[prop(default = "error-icon-size")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/errors/invalid_request.svg" class=class/>
    }
}

#[component]
pub fn LogoIcon(#[prop(default = "logo-icon-size")] class: &'static str) -> impl IntoView {
    view! {
        <img src=LOGO_ICON_PATH class=class alt="Logotipo do Ignite Feed"/>
    }
}

#[component]
pub fn NotFoundIcon(#[prop(default = "error-icon-size")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/errors/not_found.svg" class=class/>
    }
}

#[component]
pub fn PencilLineIcon(#[prop(default = "icon-size")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/pencil_line.svg" class=class/>
    }
}

#[component]
pub fn ThumbsUpIcon(#[prop(default = "icon-size")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/thumbs_up.svg" class=class/>
    }
}

#[component]
pub fn TrashIcon(#[prop(default = "icon-size")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/trash.svg" class=class/>
    }
}
