#[cfg(feature = "ssr")]
use http::StatusCode;
use leptos::prelude::*;

use crate::errors::{AppError, ErrorDisplay};

// Displays the errors caught by error boundaries and the router fallback
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<ArcRwSignal<Errors>>,
) -> impl IntoView {
    let errors = match (outside_errors, errors) {
        (Some(e), _) => ArcRwSignal::new(e),
        (None, Some(e)) => e,
        (None, None) => ArcRwSignal::new(Errors::default()),
    };
    // Get Errors from Signal
    let errors = errors.get_untracked();

    log::debug!("Error template: got errors: {errors:?}");
    // Downcast lets us take a type that implements `std::error::Error`
    let errors: Vec<AppError> = errors
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<AppError>().cloned())
        .collect();

    // Only the response code for the first error is actually sent from the server
    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        let response = use_context::<ResponseOptions>();
        if let Some(response) = response {
            let status_code = match errors.first() {
                Some(error) => error.status_code(),
                None => StatusCode::INTERNAL_SERVER_ERROR,
            };
            response.set_status(status_code);
        }
    }

    view! {
        <div class="error-template">
            <For
                each= move || {errors.clone().into_iter().enumerate()}
                key=|(index, _error)| *index
                children=move |(_, error)| {
                    view! { <ErrorDisplay error/> }
                }
            />
        </div>
    }
}
