//! # REST API for Guides
//!
//! Endpoints that compose the personalized guide and preview the
//! auto-insights of the latest diary entry.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{debug, info};

use crate::domain::auto_traits;
use crate::AppState;
use shared::{ComposeGuideRequest, GuideQuery};

/// Compose a guide from the inputs in the request body
pub async fn compose_guide(
    State(state): State<AppState>,
    Json(request): Json<ComposeGuideRequest>,
) -> impl IntoResponse {
    info!(
        "POST /api/guide/compose - months: {}, entry: {}",
        request.months,
        request.latest_entry.is_some()
    );

    let guide = state.guide_service.compose(
        request.months,
        &request.traits,
        request.latest_entry.as_ref(),
    );
    (StatusCode::OK, Json(guide)).into_response()
}

/// Compose a guide from the stored profile, traits and latest entry
pub async fn get_guide(
    State(state): State<AppState>,
    Query(query): Query<GuideQuery>,
) -> impl IntoResponse {
    info!("GET /api/guide - query: {:?}", query);

    let guide = state
        .guide_service
        .compose_from_diary(&state.diary_service, query.months);
    debug!("Guide has discipline section: {}", guide.discipline.is_some());
    (StatusCode::OK, Json(guide)).into_response()
}

/// Auto-insight preview of the latest entry; `null` before the first entry
pub async fn get_insight_preview(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/insights/preview");

    let latest = state.diary_service.latest_entry();
    let preview = auto_traits::preview(latest.as_ref());
    (StatusCode::OK, Json(preview)).into_response()
}
