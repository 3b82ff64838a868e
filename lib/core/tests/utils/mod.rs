#![allow(dead_code)]

use chrono::TimeZone;
use feed_core::post::Author;
use feed_core::state::PostState;

pub fn test_timestamp() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc.with_ymd_and_hms(2023, 6, 29, 15, 18, 0).unwrap()
}

pub fn test_author() -> Author {
    Author {
        name: String::from("Maurício Augusto"),
        role: String::from("Web Developer"),
        avatar_url: String::from("https://github.com/mrc-augusto.png"),
    }
}

pub fn create_post_state() -> PostState {
    PostState::new(test_author(), test_timestamp())
}

/// Sets the draft to `body` and submits it, panicking if the submission is rejected
pub fn submit(post_state: &mut PostState, body: &str) {
    post_state.update_draft(body.to_string());
    post_state
        .submit_comment(test_author(), test_timestamp())
        .expect("Should submit non-empty comment");
}

/// Builds a post state whose comments have exactly the given bodies, dropping the welcome comment
pub fn create_post_state_with_bodies(bodies: &[&str]) -> PostState {
    let mut post_state = create_post_state();
    post_state.request_delete_comment(feed_core::comment::WELCOME_COMMENT);
    for body in bodies {
        submit(&mut post_state, body);
    }
    post_state
}
