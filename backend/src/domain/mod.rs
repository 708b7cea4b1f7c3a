//! # Domain Module
//!
//! Contains the guidance engine and the diary state of the growth diary service.
//!
//! The engine turns a child's age, the caregiver's trait selections and the
//! most recent diary entry into a four-section guide. It is pure and
//! deterministic; the diary state is the only mutable part of the domain.
//!
//! ## Module Organization
//!
//! - **age_buckets**: Static age-banded guidance tables and the bucket resolver
//! - **macro_nutrients**: Carbohydrate/protein/fat energy split
//! - **entry_insights**: Signals extracted from a diary entry (snacks, meals, behavior keywords)
//! - **trait_rules**: Advice driven by caregiver-declared traits
//! - **insight_rules**: Advice driven by the latest diary entry
//! - **guide_service**: Assembles, de-duplicates and renders the guide
//! - **auto_traits**: Trait suggestions previewed from the latest entry
//! - **snacks**: Snack list editing for an entry draft
//! - **diary_service**: In-memory history, traits and profile
//!
//! ## Business Rules
//!
//! - Ages are clamped to 0..=84 months before any lookup
//! - Rule-generated lines start with a bullet; no line appears twice in a section
//! - Entry-driven advice only runs when the caregiver opted in to auto insights
//! - The discipline section is omitted entirely when no rule produced a line

pub mod age_buckets;
pub mod auto_traits;
pub mod diary_service;
pub mod entry_insights;
pub mod guide_service;
pub mod insight_rules;
pub mod macro_nutrients;
pub mod models;
pub mod snacks;
pub mod trait_rules;

pub use age_buckets::AgeBucketResolver;
pub use diary_service::DiaryService;
pub use entry_insights::EntryInsightExtractor;
pub use guide_service::GuideService;
pub use insight_rules::InsightRuleEngine;
pub use macro_nutrients::MacroNutrientAnalyzer;
pub use models::diary::{DiaryError, SnackTiming};
pub use trait_rules::TraitRuleEngine;
