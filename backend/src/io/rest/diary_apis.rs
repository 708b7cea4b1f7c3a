//! # REST API for Diary Entries
//!
//! Endpoints for submitting diary entries and listing the stored history.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{info, warn};

use super::diary_error_response;
use crate::AppState;
use shared::{DiaryEntryListResponse, NewDiaryEntryRequest};

/// Submit a new diary entry
pub async fn create_entry(
    State(state): State<AppState>,
    Json(request): Json<NewDiaryEntryRequest>,
) -> impl IntoResponse {
    info!("POST /api/entries - request: {:?}", request);

    match state.diary_service.submit_entry(request) {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(e) => {
            warn!("Rejected diary entry: {}", e);
            diary_error_response(&e)
        }
    }
}

/// List stored diary entries, newest first
pub async fn list_entries(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/entries");

    let response = DiaryEntryListResponse {
        entries: state.diary_service.list_entries(),
    };
    (StatusCode::OK, Json(response)).into_response()
}
