//! # REST API for Child Profile and Traits

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use super::diary_error_response;
use crate::AppState;
use shared::{ChildProfile, ChildTraits};

/// Get the tracked child's age and gender
pub async fn get_profile(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/profile");

    (StatusCode::OK, Json(state.diary_service.get_profile())).into_response()
}

/// Replace the tracked child's age and gender
pub async fn update_profile(
    State(state): State<AppState>,
    Json(profile): Json<ChildProfile>,
) -> impl IntoResponse {
    info!("PUT /api/profile - request: {:?}", profile);

    match state.diary_service.update_profile(profile) {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(e) => {
            error!("Failed to update profile: {}", e);
            diary_error_response(&e)
        }
    }
}

/// Get the caregiver's trait selections
pub async fn get_traits(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/traits");

    (StatusCode::OK, Json(state.diary_service.get_traits())).into_response()
}

/// Replace the caregiver's trait selections
pub async fn update_traits(
    State(state): State<AppState>,
    Json(traits): Json<ChildTraits>,
) -> impl IntoResponse {
    info!("PUT /api/traits - request: {:?}", traits);

    let traits = state.diary_service.update_traits(traits);
    (StatusCode::OK, Json(traits)).into_response()
}
