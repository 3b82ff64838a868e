use chrono::{DateTime, Utc};
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use feed_core::comment::CommentId;
use feed_core::post::{Author, ContentLine, Post};
use feed_core::state::PostState;
use feed_utils::constants::PLACEHOLDER_LINK;
use feed_utils::errors::AppError;
use feed_utils::widget::TimeAgoWidget;

use crate::avatar::Avatar;
use crate::comment::CommentBox;

/// Post component, owns the post's comments and the new comment form
#[component]
pub fn PostCard(
    post: Post,
    /// author of the comments written in this post
    commenter: Author,
) -> impl IntoView {
    // the welcome comment takes the publication date so that server and client render the same thread
    let post_state = RwSignal::new(PostState::new(commenter.clone(), post.published_at));
    let commenter = StoredValue::new(commenter);

    let on_applaud = Callback::new(move |comment_id: CommentId| {
        if let Some(Err(e)) = post_state.try_update(|state| state.applaud(comment_id)) {
            log::warn!("Cannot applaud comment: {}", e.error_detail());
        }
    });
    let on_delete = Callback::new(move |comment_id: CommentId| {
        if let Some(Err(e)) = post_state.try_update(|state| state.delete_comment(comment_id)) {
            log::warn!("Cannot delete comment: {}", e.error_detail());
        }
    });

    let content_view = post.displayable_content()
        .map(|line| view! { <ContentLineView line=line.clone()/> })
        .collect_view();

    view! {
        <article class="post">
            <PostHeader author=post.author published_at=post.published_at/>
            <div class="post-content">
                {content_view}
            </div>
            <CommentForm post_state commenter/>
            <div class="comment-list">
                <For
                    each=move || post_state.read().comment_thread().comments().to_vec()
                    key=|comment| comment.comment_id
                    children=move |comment| {
                        let comment_id = comment.comment_id;
                        let like_count = Signal::derive(
                            move || post_state.read().comment_thread().like_count(comment_id).unwrap_or_default()
                        );
                        view! {
                            <CommentBox comment like_count on_applaud on_delete/>
                        }
                    }
                />
            </div>
        </article>
    }
}

/// Header of a post with its author and publication time
#[component]
fn PostHeader(
    author: Author,
    published_at: DateTime<Utc>,
) -> impl IntoView {
    let Author { name, role, avatar_url } = author;
    view! {
        <header class="post-header">
            <div class="post-author">
                <Avatar src=avatar_url alt=name.clone()/>
                <div class="post-author-info">
                    <strong>{name}</strong>
                    <span>{role}</span>
                </div>
            </div>
            <TimeAgoWidget timestamp=published_at/>
        </header>
    }
}

#[component]
fn ContentLineView(
    line: ContentLine,
) -> impl IntoView {
    match line {
        ContentLine::Paragraph { content } => view! { <p>{content}</p> }.into_any(),
        ContentLine::Link { content } => view! { <p><a href=PLACEHOLDER_LINK>{content}</a></p> }.into_any(),
        ContentLine::Unsupported => ().into_any(),
    }
}

/// Form to write a new comment. Publishing is disabled while the draft is empty.
#[component]
fn CommentForm(
    post_state: RwSignal<PostState>,
    commenter: StoredValue<Author>,
) -> impl IntoView {
    let textarea_ref = NodeRef::<html::Textarea>::new();
    let is_draft_empty = Signal::derive(move || !post_state.read().can_submit());
    let draft_content = move || post_state.read().draft().content().to_string();
    let validation_message = move || post_state.read().draft().validation_error().map(AppError::user_message);

    let set_custom_validity = move |message: &str| {
        if let Some(textarea) = textarea_ref.get_untracked() {
            textarea.set_custom_validity(message);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let result = post_state.try_update(|state| state.submit_comment(commenter.get_value(), Utc::now()));
        match result {
            Some(Err(e)) => set_custom_validity(&e.user_message()),
            _ => set_custom_validity(""),
        }
    };

    view! {
        <form class="comment-form" on:submit=on_submit>
            <strong>"Deixe seu feedback"</strong>
            <textarea
                name="comment"
                placeholder="Deixe um comentário"
                node_ref=textarea_ref
                prop:value=draft_content
                required=true
                on:input=move |ev| {
                    set_custom_validity("");
                    post_state.update(|state| state.update_draft(event_target_value(&ev)));
                }
                on:invalid=move |_| {
                    post_state.update(|state| state.mark_draft_invalid());
                    set_custom_validity(&AppError::EmptyComment.user_message());
                }
            />
            {move || validation_message().map(|message| view! {
                <span class="comment-form-error" role="alert">{message}</span>
            })}
            <footer>
                <button type="submit" disabled=is_draft_empty>
                    "Publicar"
                </button>
            </footer>
        </form>
    }
}
