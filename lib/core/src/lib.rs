pub mod comment;
pub mod draft;
pub mod feed;
pub mod post;
pub mod profile;
pub mod state;
