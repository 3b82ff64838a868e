#![recursion_limit = "256"]
use axum::{body::Body as AxumBody, extract::State, http::Request, response::{IntoResponse, Response}, routing::get, Router};
use axum::body::Body;
use axum::http::HeaderValue;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};

use feed_app::app::*;
use crate::config::{get_log_level, DEFAULT_LOG_LEVEL, LOG_LEVEL_ENV};
use crate::fallback::file_and_error_handler;
use crate::state::AppState;

mod config;
mod fallback;
mod state;

async fn leptos_routes_handler(
    app_state: State<AppState>,
    req: Request<AxumBody>,
) -> Response {
    let leptos_options = app_state.leptos_options.clone();

    log::info!("leptos_routes_handler for uri: {:?}", req.uri());
    let handler = leptos_axum::render_route_with_context(
        app_state.routes.clone(),
        move || {},
        move || shell(leptos_options.clone()),
    );
    let mut response = handler(app_state, req).await.into_response();
    add_security_headers(&mut response);
    response
}

fn add_security_headers(response: &mut Response<Body>) {
    let headers = response.headers_mut();

    headers.insert("X-Content-Type-Options", HeaderValue::from_static("nosniff"));
    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));
    headers.insert("Referrer-Policy", HeaderValue::from_static("strict-origin-when-cross-origin"));
    headers.insert("Permissions-Policy", HeaderValue::from_static("geolocation=(), microphone=(), camera=()"));
    headers.insert("Cross-Origin-Opener-Policy", HeaderValue::from_static("same-origin"));
}

#[tokio::main]
async fn main() {
    let log_level = get_log_level();
    simple_logger::init_with_level(log_level.as_ref().copied().unwrap_or(DEFAULT_LOG_LEVEL))
        .expect("Should be able to initialize logging.");
    if let Err(e) = &log_level {
        log::error!("Could not parse {LOG_LEVEL_ENV}, use default level {DEFAULT_LOG_LEVEL}: {e}");
    }

    let subscriber = tracing_subscriber::fmt().with_max_level(tracing::Level::ERROR).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting tracing default failed");

    // Setting get_configuration(None) means we'll be using cargo-leptos's env values
    // For deployment these variables are:
    // <https://github.com/leptos-rs/start-axum#executing-a-server-on-a-remote-machine-without-the-toolchain>
    let conf = get_configuration(None).expect("Should load leptos configuration.");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app_state = AppState {
        leptos_options,
        routes: routes.clone(),
    };

    let app = Router::new()
        .leptos_routes_with_handler(routes, get(leptos_routes_handler))
        .fallback(file_and_error_handler)
        .with_state(app_state);

    log::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.expect("Should bind listener.");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server should run.");
}
