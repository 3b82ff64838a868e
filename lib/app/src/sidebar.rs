use leptos::prelude::*;
use feed_core::profile::Profile;
use feed_utils::constants::PLACEHOLDER_LINK;
use feed_utils::icons::PencilLineIcon;

use crate::avatar::Avatar;

/// Sidebar with the profile card of the current user
#[component]
pub fn Sidebar(
    profile: Profile,
) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <img class="sidebar-cover" src=profile.cover_url alt=""/>
            <div class="sidebar-profile">
                <Avatar src=profile.avatar_url/>
                <strong>{profile.name}</strong>
                <span>{profile.role}</span>
            </div>
            <footer>
                <a href=PLACEHOLDER_LINK>
                    <PencilLineIcon/>
                    "Editar seu perfil"
                </a>
            </footer>
        </aside>
    }
}
