//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain.
//!
//! Handlers deserialize requests, call the guide and diary services, and map
//! domain errors onto status codes. No guidance logic lives here.
//!
//! ## Supported Operations
//!
//! - **POST /api/guide/compose**: Compose a guide from supplied inputs
//! - **GET /api/guide**: Compose a guide from stored traits, profile and latest entry
//! - **GET /api/insights/preview**: Auto-insight preview of the latest entry
//! - **GET/PUT /api/traits**: Caregiver trait selections
//! - **GET/PUT /api/profile**: Age and gender of the tracked child
//! - **GET/POST /api/entries**: Diary history and submission
//! - **POST /api/drafts/snacks[/adjust]**: Snack list edits on an entry draft

pub mod rest;

pub use rest::*;
