//! # Growth Diary Backend
//!
//! Guidance service for the growth diary: composes a personalized parenting
//! guide from a child's age, caregiver-declared traits and the latest diary
//! entry, and keeps the diary history the guide reads from.
//!
//! ## Architecture
//!
//! ```text
//! HTTP clients
//!     ↓
//! IO Layer (REST handlers)
//!     ↓
//! Domain Layer (guide engine, diary state)
//! ```

pub mod config;
pub mod domain;
pub mod io;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub use config::GrowthDiaryConfig;
use domain::{DiaryService, GuideService};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub guide_service: GuideService,
    pub diary_service: DiaryService,
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &GrowthDiaryConfig) -> AppState {
    info!("Setting up domain model");
    let guide_service = GuideService::new();
    let diary_service = DiaryService::new(config.history_capacity);

    info!(
        "Setting up application state (history capacity {})",
        config.history_capacity
    );
    AppState {
        guide_service,
        diary_service,
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: &str) -> Result<Router> {
    let origin = cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/guide", get(io::get_guide))
        .route("/guide/compose", post(io::compose_guide))
        .route("/insights/preview", get(io::get_insight_preview))
        .route("/traits", get(io::get_traits).put(io::update_traits))
        .route("/profile", get(io::get_profile).put(io::update_profile))
        .route("/entries", get(io::list_entries).post(io::create_entry))
        .route("/drafts/snacks", post(io::add_draft_snack))
        .route("/drafts/snacks/adjust", post(io::adjust_draft_snack));

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state))
}
