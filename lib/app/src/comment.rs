use leptos::prelude::*;
use feed_core::comment::{Comment, CommentId};
use feed_core::post::Author;
use feed_utils::icons::{ThumbsUpIcon, TrashIcon};
use feed_utils::widget::{LikeCount, TimeAgoWidget};

use crate::avatar::Avatar;

/// Component displaying a single comment. Deleting and applauding are delegated to the owner of the comment.
#[component]
pub fn CommentBox(
    comment: Comment,
    #[prop(into)]
    like_count: Signal<u64>,
    on_applaud: Callback<CommentId>,
    on_delete: Callback<CommentId>,
) -> impl IntoView {
    let Comment { comment_id, body, author, create_timestamp, .. } = comment;
    let Author { name, avatar_url, .. } = author;

    view! {
        <div class="comment">
            <Avatar src=avatar_url alt=name.clone() has_border=false/>
            <div class="comment-box">
                <div class="comment-content">
                    <header>
                        <div class="comment-author-and-time">
                            <strong>{name}</strong>
                            <TimeAgoWidget timestamp=create_timestamp/>
                        </div>
                        <button
                            title="Deletar comentário"
                            on:click=move |_| on_delete.run(comment_id)
                        >
                            <TrashIcon/>
                        </button>
                    </header>
                    <p>{body}</p>
                </div>
                <footer>
                    <button on:click=move |_| on_applaud.run(comment_id)>
                        <ThumbsUpIcon/>
                        <LikeCount count=like_count/>
                    </button>
                </footer>
            </div>
        </div>
    }
}
