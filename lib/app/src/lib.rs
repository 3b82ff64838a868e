#![recursion_limit = "256"]
pub mod app;
pub mod avatar;
pub mod comment;
pub mod post;
pub mod sidebar;
