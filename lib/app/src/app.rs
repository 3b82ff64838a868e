use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{components::{Route, Router, Routes}, StaticSegment};

use feed_core::feed::{default_feed, Feed};
use feed_utils::constants::LOCALE_TAG;
use feed_utils::error_template::ErrorTemplate;
use feed_utils::errors::{AppError, ErrorDisplay};
use feed_utils::icons::LogoIcon;

use crate::post::PostCard;
use crate::sidebar::Sidebar;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang=LOCALE_TAG>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <Meta
                    http_equiv="Content-Security-Policy"
                    content=move || {
                        // this will insert the CSP with nonce on the server, be empty on client
                        use_nonce().map(|nonce| {
                            format!(
                                "default-src 'self';
                                script-src 'strict-dynamic' 'nonce-{nonce}' 'wasm-unsafe-eval';
                                img-src 'self' https: data:;
                                style-src 'self' 'nonce-{nonce}';
                                connect-src 'self' ws://localhost:3001/ ws://127.0.0.1:3001/;"
                            )
                        }).unwrap_or_default()
                    }
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/feed.css"/>

        // sets the document title
        <Title text="Ignite Feed"/>
        <Router>
            <Header/>
            <Routes fallback=|| {
                let mut outside_errors = Errors::default();
                outside_errors.insert_with_default_key(AppError::NotFound);
                view! {
                    <ErrorTemplate outside_errors/>
                }
            }>
                <Route path=StaticSegment("") view=FeedPage/>
            </Routes>
        </Router>
    }
}

/// Top bar with the application's logo
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <LogoIcon/>
            <strong>"Ignite Feed"</strong>
        </header>
    }
}

/// Renders the profile sidebar next to the list of posts
#[component]
fn FeedPage() -> impl IntoView {
    match default_feed() {
        Ok(Feed { profile, posts }) => {
            let commenter = profile.as_author();
            view! {
                <div class="wrapper">
                    <Sidebar profile/>
                    <main>
                        <For
                            each=move || posts.clone()
                            key=|post| post.post_id
                            children=move |post| view! {
                                <PostCard post commenter=commenter.clone()/>
                            }
                        />
                    </main>
                </div>
            }.into_any()
        },
        Err(error) => view! { <ErrorDisplay error/> }.into_any(),
    }
}
