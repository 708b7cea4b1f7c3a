//! # REST API for Snack Drafts
//!
//! Stateless edits of the snack list while an entry is being written. The
//! client sends its current nutrition draft and receives the updated one.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{info, warn};

use super::diary_error_response;
use crate::domain::snacks::{add_snack, adjust_snack_count};
use crate::domain::{DiaryError, SnackTiming};
use shared::{AddSnackRequest, AdjustSnackRequest};

/// Append a snack with count 1 to the draft
pub async fn add_draft_snack(Json(request): Json<AddSnackRequest>) -> impl IntoResponse {
    info!(
        "POST /api/drafts/snacks - name: {:?}, timing: {:?}",
        request.name, request.timing
    );

    let Some(timing) = SnackTiming::parse(&request.timing) else {
        let e = DiaryError::InvalidSnackTiming(request.timing);
        warn!("Rejected snack: {}", e);
        return diary_error_response(&e);
    };

    let mut nutrition = request.nutrition;
    match add_snack(&mut nutrition, &request.name, timing) {
        Ok(_) => (StatusCode::OK, Json(nutrition)).into_response(),
        Err(e) => {
            warn!("Rejected snack: {}", e);
            diary_error_response(&e)
        }
    }
}

/// Change a draft snack's count; snacks reaching 0 are removed
pub async fn adjust_draft_snack(Json(request): Json<AdjustSnackRequest>) -> impl IntoResponse {
    info!(
        "POST /api/drafts/snacks/adjust - snack: {}, delta: {}",
        request.snack_id, request.delta
    );

    let mut nutrition = request.nutrition;
    match adjust_snack_count(&mut nutrition, &request.snack_id, request.delta) {
        Ok(_) => (StatusCode::OK, Json(nutrition)).into_response(),
        Err(e) => {
            warn!("Failed to adjust snack: {}", e);
            diary_error_response(&e)
        }
    }
}
