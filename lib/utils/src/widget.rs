use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::constants::TIME_AGO_REFRESH_INTERVAL_MS;
use crate::time::{format_distance_to_now, format_publish_date};

/// Component to display how long ago `timestamp` was, with the absolute date as tooltip.
/// The relative string is refreshed every minute.
#[component]
pub fn TimeAgoWidget(
    timestamp: DateTime<Utc>,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let now = RwSignal::new(Utc::now());
    let _refresh = use_interval_fn(move || now.set(Utc::now()), TIME_AGO_REFRESH_INTERVAL_MS);

    let title = format_publish_date(timestamp);
    let datetime = timestamp.to_rfc3339();

    view! {
        <time class=class title=title datetime=datetime>
            {move || format_distance_to_now(timestamp, now.get())}
        </time>
    }
}

/// Component to display a like counter next to its label
#[component]
pub fn LikeCount(
    #[prop(into)]
    count: Signal<u64>,
    #[prop(default = "Aplaudir")]
    label: &'static str,
) -> impl IntoView {
    view! {
        {label}
        " "
        <span>{move || count.get()}</span>
    }
}
