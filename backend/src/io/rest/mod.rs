//! # REST API Interface Layer
//!
//! One submodule per resource. Routes are wired in [`crate::create_router`].

pub mod diary_apis;
pub mod guide_apis;
pub mod profile_apis;
pub mod snack_apis;

pub use diary_apis::*;
pub use guide_apis::*;
pub use profile_apis::*;
pub use snack_apis::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::DiaryError;

/// Unknown snacks are 404; every other validation failure is 400
pub(crate) fn diary_error_response(error: &DiaryError) -> Response {
    let status = match error {
        DiaryError::SnackNotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    };
    (status, error.to_string()).into_response()
}
