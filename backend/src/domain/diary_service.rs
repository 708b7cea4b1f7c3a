//! Diary history, caregiver traits and child profile.
//!
//! State is kept in memory for the lifetime of the process. The history is
//! ordered newest first and capped; the guide only ever reads the first
//! entry.

use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::Local;
use shared::{ChildProfile, ChildTraits, DiaryEntry, NewDiaryEntryRequest, Nutrition};
use tracing::{info, warn};
use uuid::Uuid;

use super::models::diary::{DiaryError, SnackTiming, ALLOWED_COMPLETION_RATES, MAX_TRACKED_MONTHS};

/// Default number of entries kept in the history
pub const DEFAULT_HISTORY_CAPACITY: usize = 90;

#[derive(Clone)]
pub struct DiaryService {
    capacity: usize,
    entries: Arc<RwLock<VecDeque<DiaryEntry>>>,
    traits: Arc<RwLock<ChildTraits>>,
    profile: Arc<RwLock<ChildProfile>>,
}

impl DiaryService {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Arc::new(RwLock::new(VecDeque::new())),
            traits: Arc::new(RwLock::new(ChildTraits::default())),
            profile: Arc::new(RwLock::new(ChildProfile::default())),
        }
    }

    /// Validate and store a caregiver submission.
    ///
    /// The id, date, age and gender are assigned here; the stored entry is
    /// never modified afterwards.
    pub fn submit_entry(&self, request: NewDiaryEntryRequest) -> Result<DiaryEntry, DiaryError> {
        validate_nutrition(&request.nutrition)?;

        let profile = self.get_profile();
        let entry = DiaryEntry {
            id: Uuid::new_v4().to_string(),
            date: Local::now().format("%Y-%m-%d").to_string(),
            months: profile.months,
            gender: profile.gender,
            image_url: request.image_url,
            play: request.play,
            nutrition: request.nutrition,
            milestone: request.milestone,
            discipline: request.discipline,
        };

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.push_front(entry.clone());
        if entries.len() > self.capacity {
            let dropped = entries.len() - self.capacity;
            entries.truncate(self.capacity);
            info!("Dropped {} oldest diary entries (capacity {})", dropped, self.capacity);
        }

        info!(
            "Saved diary entry {} for {} months ({} entries stored)",
            entry.id,
            entry.months,
            entries.len()
        );
        Ok(entry)
    }

    /// All stored entries, newest first
    pub fn list_entries(&self) -> Vec<DiaryEntry> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.iter().cloned().collect()
    }

    pub fn latest_entry(&self) -> Option<DiaryEntry> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.front().cloned()
    }

    pub fn get_traits(&self) -> ChildTraits {
        self.traits
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn update_traits(&self, traits: ChildTraits) -> ChildTraits {
        info!("Updating child traits: {:?}", traits);
        let mut current = self.traits.write().unwrap_or_else(PoisonError::into_inner);
        *current = traits;
        current.clone()
    }

    pub fn get_profile(&self) -> ChildProfile {
        *self.profile.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn update_profile(&self, profile: ChildProfile) -> Result<ChildProfile, DiaryError> {
        if profile.months > MAX_TRACKED_MONTHS {
            warn!("Rejected profile with {} months", profile.months);
            return Err(DiaryError::MonthsOutOfRange(i64::from(profile.months)));
        }

        info!("Updating child profile: {:?}", profile);
        let mut current = self.profile.write().unwrap_or_else(PoisonError::into_inner);
        *current = profile;
        Ok(profile)
    }
}

impl Default for DiaryService {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

/// Check completion rates, snack timings and macro grams of a submission
pub fn validate_nutrition(nutrition: &Nutrition) -> Result<(), DiaryError> {
    let meals = [
        ("breakfast", nutrition.breakfast_rate),
        ("lunch", nutrition.lunch_rate),
        ("dinner", nutrition.dinner_rate),
    ];
    for (meal, rate) in meals {
        if !ALLOWED_COMPLETION_RATES.contains(&rate) {
            return Err(DiaryError::InvalidCompletionRate { meal, rate });
        }
    }

    for snack in &nutrition.snacks {
        if SnackTiming::parse(&snack.timing).is_none() {
            return Err(DiaryError::InvalidSnackTiming(snack.timing.clone()));
        }
    }

    let grams = [
        ("carbohydrate", nutrition.carbs_g),
        ("protein", nutrition.protein_g),
        ("fat", nutrition.fat_g),
    ];
    for (nutrient, value) in grams {
        if matches!(value, Some(g) if g < 0.0) {
            return Err(DiaryError::NegativeMacro { nutrient });
        }
    }

    Ok(())
}
