//! Signals derived from a single diary entry: meal completion, snack
//! patterns, macro split and discipline keyword matches.

use shared::DiaryEntry;
use tracing::debug;

use super::macro_nutrients::MacroNutrientAnalyzer;
use super::models::diary::SnackTiming;
use super::models::entry_insight::{BehaviorCategory, EntryInsight};

/// Snack names containing any of these count as sugary or processed
pub const SUGARY_SNACK_KEYWORDS: [&str; 9] = [
    "과자", "쿠키", "초코", "사탕", "젤리", "주스", "콜라", "빵", "아이스",
];

/// Keyword groups tested against the discipline notes, in output order
pub static BEHAVIOR_KEYWORDS: [(BehaviorCategory, &[&str]); 5] = [
    (BehaviorCategory::Throwing, &["던", "집어", "부수"]),
    (BehaviorCategory::Aggression, &["때리", "밀", "물"]),
    (BehaviorCategory::Tantrum, &["떼쓰", "울", "소리"]),
    (BehaviorCategory::Refusal, &["거부", "안해", "싫어"]),
    (
        BehaviorCategory::SafetyHazard,
        &["머리", "계단", "도로", "불", "칼", "콘센트"],
    ),
];

/// Categories whose keywords appear in `text`, in table order
pub fn classify_behavior(text: &str) -> Vec<BehaviorCategory> {
    BEHAVIOR_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(category, _)| *category)
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EntryInsightExtractor {
    macro_analyzer: MacroNutrientAnalyzer,
}

impl EntryInsightExtractor {
    pub fn new() -> Self {
        Self {
            macro_analyzer: MacroNutrientAnalyzer::new(),
        }
    }

    pub fn extract(&self, entry: &DiaryEntry) -> EntryInsight {
        let nutrition = &entry.nutrition;
        let rates = nutrition.meal_rates();
        let avg_completion_rate = average_completion_rate(&rates);
        let any_meal_zero = rates.iter().any(|rate| *rate == 0);

        let total_snack_count = nutrition
            .snacks
            .iter()
            .fold(0u32, |acc, snack| acc.saturating_add(snack.count));
        let after_dinner_snack_count = nutrition
            .snacks
            .iter()
            .filter(|snack| snack.timing.contains(SnackTiming::AfterDinner.label()))
            .fold(0u32, |acc, snack| acc.saturating_add(snack.count));
        let has_sugary_snack = nutrition.snacks.iter().any(|snack| {
            SUGARY_SNACK_KEYWORDS
                .iter()
                .any(|keyword| snack.name.contains(keyword))
        });

        let macro_split =
            self.macro_analyzer
                .analyze(nutrition.carbs_g, nutrition.protein_g, nutrition.fat_g);

        let behavior = entry.discipline.behavior.trim().to_string();
        let situation = entry.discipline.situation.trim().to_string();
        let notes = format!("{} {}", behavior, situation);
        let behavior_categories = classify_behavior(notes.trim());

        debug!(
            "Entry {}: avg rate {:.1}, snacks {} ({} after dinner), sugary {}, categories {:?}",
            entry.id,
            avg_completion_rate,
            total_snack_count,
            after_dinner_snack_count,
            has_sugary_snack,
            behavior_categories
        );

        EntryInsight {
            avg_completion_rate,
            any_meal_zero,
            total_snack_count,
            after_dinner_snack_count,
            has_sugary_snack,
            macro_split,
            discipline_count: entry.discipline.count,
            behavior,
            situation,
            behavior_categories,
        }
    }
}

/// Mean of the recorded meal completion rates
pub fn average_completion_rate(rates: &[u32]) -> f64 {
    if rates.is_empty() {
        return 100.0;
    }
    let sum: u64 = rates.iter().map(|rate| u64::from(*rate)).sum();
    sum as f64 / rates.len() as f64
}
