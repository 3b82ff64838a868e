use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

use http::status::StatusCode;
use leptos::prelude::*;
use leptos::{component, view, IntoView};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::icons::{InternalErrorIcon, InvalidRequestIcon, NotFoundIcon};

const EMPTY_COMMENT_MESSAGE: &str = "Escreva algo antes de publicar.";
const COMMENT_NOT_FOUND_MESSAGE: &str = "Este comentário não existe mais.";
const INVALID_FEED_MESSAGE: &str = "Não foi possível carregar o feed.";
const INTERNAL_ERROR_MESSAGE: &str = "Algo deu errado.";
const NOT_FOUND_MESSAGE: &str = "Não há nada aqui.";

#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    EmptyComment,
    CommentNotFound(u64),
    InvalidFeedData(String),
    InternalServerError(String),
    NotFound,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::EmptyComment => StatusCode::BAD_REQUEST,
            AppError::CommentNotFound(_) | AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidFeedData(_) | AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            AppError::EmptyComment => String::from(EMPTY_COMMENT_MESSAGE),
            AppError::CommentNotFound(_) => String::from(COMMENT_NOT_FOUND_MESSAGE),
            AppError::InvalidFeedData(_) => String::from(INVALID_FEED_MESSAGE),
            AppError::InternalServerError(_) => String::from(INTERNAL_ERROR_MESSAGE),
            AppError::NotFound => String::from(NOT_FOUND_MESSAGE),
        }
    }

    pub fn error_detail(&self) -> String {
        match self {
            AppError::EmptyComment => String::from("Comment draft is empty"),
            AppError::CommentNotFound(comment_id) => format!("No comment with id {comment_id}"),
            AppError::InvalidFeedData(e) => e.clone(),
            AppError::InternalServerError(e) => e.clone(),
            AppError::NotFound => String::from(NOT_FOUND_MESSAGE),
        }
    }

    /// Constructs a new [`AppError::InternalServerError`] from some other type.
    pub fn new(msg: impl ToString) -> Self {
        Self::InternalServerError(msg.to_string())
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::to_string(self).unwrap_or_default())
    }
}

impl FromStr for AppError {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::InvalidFeedData(error.to_string())
    }
}

#[component]
pub fn AppErrorIcon(
    app_error: AppError,
) -> impl IntoView {
    match app_error {
        AppError::EmptyComment => view! { <InvalidRequestIcon/> }.into_any(),
        AppError::CommentNotFound(_) | AppError::NotFound => view! { <NotFoundIcon/> }.into_any(),
        AppError::InvalidFeedData(_) | AppError::InternalServerError(_) => view! { <InternalErrorIcon/> }.into_any(),
    }
}

/// Displays an error
#[component]
pub fn ErrorDisplay(
    error: AppError
) -> impl IntoView {
    let status_code = error.status_code().as_u16();
    let user_message = error.user_message();

    log::error!("Caught error, status_code: {status_code}, error detail: {}", error.error_detail());
    view! {
        <div class="error-display">
            <AppErrorIcon app_error=error/>
            <div class="error-display-text">
                <h2>{status_code}</h2>
                <h3>{user_message}</h3>
            </div>
        </div>
    }.into_any()
}
