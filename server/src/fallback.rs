use axum::{
    body::Body,
    extract::State,
    http::{Request, Response, StatusCode, Uri},
    response::{IntoResponse, Response as AxumResponse},
};
use axum::http::{header, HeaderValue};
use leptos::prelude::{Errors, LeptosOptions};
use leptos::view;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;

use feed_utils::error_template::ErrorTemplate;
use feed_utils::errors::AppError;

use crate::config::is_prod_mode;

/// Serves static files from the site root, renders a 404 page for anything else
pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> AxumResponse {
    let root = options.site_root.clone();
    let res = get_static_file(uri, &root).await;

    if res.status() == StatusCode::OK {
        res.into_response()
    } else {
        log::debug!("No static file for uri {}, render not found page.", req.uri());
        let mut errors = Errors::default();
        errors.insert_with_default_key(AppError::NotFound);
        let handler = leptos_axum::render_app_to_stream(
            move || view! {<ErrorTemplate outside_errors=errors.clone()/>},
        );
        handler(req).await.into_response()
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Response<Body> {
    let mut req = Request::new(Body::empty());
    *req.uri_mut() = uri;
    // `ServeDir` implements `tower::Service` so we can call it with `tower::ServiceExt::oneshot`
    // This path is relative to the cargo root
    let mut response = ServeDir::new(root)
        .oneshot(req)
        .await
        .unwrap_or_else(|err| match err {})
        .into_response();

    if is_prod_mode() {
        response.headers_mut().append(header::CACHE_CONTROL, HeaderValue::from_static("public, max-age=31536000, immutable"));
    }

    response
}
