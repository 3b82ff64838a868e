use rand::Rng;

use feed_core::comment::{CommentId, WELCOME_COMMENT};
use feed_utils::errors::AppError;

use crate::utils::{create_post_state, create_post_state_with_bodies, submit, test_author, test_timestamp};

mod utils;

#[test]
fn test_submit_comment() {
    let mut post_state = create_post_state();
    post_state.update_draft(String::from("Ótimo!"));

    let comment_id = post_state.submit_comment(test_author(), test_timestamp()).expect("Should submit comment");

    assert_eq!(post_state.comment_thread().bodies(), vec![WELCOME_COMMENT, "Ótimo!"]);
    assert_eq!(post_state.draft().content(), "");
    assert_eq!(post_state.draft().validation_error(), None);

    let comment = post_state.comment_thread().get(comment_id).expect("Should find submitted comment");
    assert_eq!(comment.author, test_author());
    assert_eq!(comment.create_timestamp, test_timestamp());
    assert_eq!(comment.like_count, 0);
}

#[test]
fn test_submit_comment_sequence_preserves_order() {
    let mut rng = rand::rng();
    let num_comments = rng.random_range(1..50);
    let bodies: Vec<String> = (0..num_comments).map(|i| format!("comment {i}")).collect();

    let mut post_state = create_post_state();
    for body in &bodies {
        submit(&mut post_state, body);
        assert_eq!(post_state.draft().content(), "");
    }

    let mut expected_bodies = vec![WELCOME_COMMENT];
    expected_bodies.extend(bodies.iter().map(String::as_str));
    assert_eq!(post_state.comment_thread().bodies(), expected_bodies);
}

#[test]
fn test_submit_empty_comment() {
    let mut post_state = create_post_state();
    assert!(!post_state.can_submit());

    assert_eq!(post_state.submit_comment(test_author(), test_timestamp()), Err(AppError::EmptyComment));

    assert_eq!(post_state.comment_thread().bodies(), vec![WELCOME_COMMENT]);
    assert_eq!(post_state.draft().content(), "");
    assert_eq!(post_state.draft().validation_error(), Some(&AppError::EmptyComment));
}

#[test]
fn test_submit_blank_comment() {
    let mut post_state = create_post_state();
    post_state.update_draft(String::from("   "));
    assert!(post_state.can_submit());

    assert_eq!(post_state.submit_comment(test_author(), test_timestamp()), Err(AppError::EmptyComment));
    assert_eq!(post_state.comment_thread().len(), 1);
    assert_eq!(post_state.draft().content(), "   ");
}

#[test]
fn test_invalid_draft_recovers_on_input() {
    let mut post_state = create_post_state();
    post_state.mark_draft_invalid();
    assert_eq!(post_state.draft().validation_error(), Some(&AppError::EmptyComment));
    assert_eq!(post_state.comment_thread().len(), 1);

    post_state.update_draft(String::from("a"));
    assert_eq!(post_state.draft().validation_error(), None);
    assert!(post_state.can_submit());
}

#[test]
fn test_request_delete_comment_removes_all_matches() {
    let mut post_state = create_post_state_with_bodies(&["a", "b", "a"]);

    assert_eq!(post_state.request_delete_comment("a"), 2);
    assert_eq!(post_state.comment_thread().bodies(), vec!["b"]);
}

#[test]
fn test_request_delete_comment_keeps_order() {
    let mut post_state = create_post_state_with_bodies(&["a", "b", "c", "b", "d"]);

    assert_eq!(post_state.request_delete_comment("b"), 2);
    assert_eq!(post_state.comment_thread().bodies(), vec!["a", "c", "d"]);
}

#[test]
fn test_request_delete_missing_comment() {
    let mut post_state = create_post_state_with_bodies(&["a", "b"]);

    assert_eq!(post_state.request_delete_comment("z"), 0);
    assert_eq!(post_state.comment_thread().bodies(), vec!["a", "b"]);
}

#[test]
fn test_delete_comment_by_id_removes_single_duplicate() {
    let mut post_state = create_post_state_with_bodies(&["a", "b", "a"]);
    let second_a_id = post_state.comment_thread().comments()[2].comment_id;

    post_state.delete_comment(second_a_id).expect("Should delete comment by id");

    assert_eq!(post_state.comment_thread().bodies(), vec!["a", "b"]);
    assert!(post_state.comment_thread().get(second_a_id).is_none());
    assert_eq!(post_state.delete_comment(second_a_id), Err(AppError::CommentNotFound(second_a_id.0)));
}

#[test]
fn test_applaud() {
    let mut post_state = create_post_state_with_bodies(&["a", "b"]);
    let comment_a_id = post_state.comment_thread().comments()[0].comment_id;
    let comment_b_id = post_state.comment_thread().comments()[1].comment_id;

    let applaud_count = 7;
    for i in 1..=applaud_count {
        assert_eq!(post_state.applaud(comment_a_id), Ok(i));
    }

    assert_eq!(post_state.comment_thread().like_count(comment_a_id), Some(applaud_count));
    assert_eq!(post_state.comment_thread().like_count(comment_b_id), Some(0));
    assert_eq!(post_state.applaud(CommentId(1000)), Err(AppError::CommentNotFound(1000)));
}

#[test]
fn test_like_count_discarded_with_comment() {
    let mut post_state = create_post_state_with_bodies(&["a"]);
    let comment_id = post_state.comment_thread().comments()[0].comment_id;
    post_state.applaud(comment_id).expect("Should applaud comment");

    post_state.delete_comment(comment_id).expect("Should delete comment");
    submit(&mut post_state, "a");

    let new_comment = &post_state.comment_thread().comments()[0];
    assert_ne!(new_comment.comment_id, comment_id);
    assert_eq!(new_comment.like_count, 0);
}
