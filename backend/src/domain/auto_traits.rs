//! Trait suggestions derived from the latest diary entry.
//!
//! The preview is shown next to the traits form. When the caregiver keeps
//! auto insights enabled, the eating-related traits used for the stored-state
//! guide are adjusted from it.

use shared::{AutoInsightPreview, ChildTraits, DiaryEntry, PickyEating};

use super::entry_insights::average_completion_rate;

const SEVERE_PICKY_BELOW: f64 = 50.0;
const SOME_PICKY_BELOW: f64 = 80.0;
const SNACK_OFTEN_FROM: u32 = 3;

/// Preview for `entry`, or `None` when there is no entry yet
pub fn preview(entry: Option<&DiaryEntry>) -> Option<AutoInsightPreview> {
    let entry = entry?;
    let nutrition = &entry.nutrition;
    let rates = nutrition.meal_rates();
    let avg_completion_rate = average_completion_rate(&rates);
    let total_snacks = nutrition
        .snacks
        .iter()
        .fold(0u32, |acc, snack| acc.saturating_add(snack.count));

    let picky_auto = if avg_completion_rate < SEVERE_PICKY_BELOW || rates.contains(&0) {
        PickyEating::Severe
    } else if avg_completion_rate < SOME_PICKY_BELOW {
        PickyEating::Some
    } else {
        PickyEating::NoIssue
    };

    Some(AutoInsightPreview {
        avg_completion_rate,
        total_snacks,
        picky_auto,
        snack_often_auto: total_snacks >= SNACK_OFTEN_FROM,
        carbs_g: nutrition.carbs_g,
        protein_g: nutrition.protein_g,
        fat_g: nutrition.fat_g,
        discipline_count: entry.discipline.count,
        discipline_behavior: entry.discipline.behavior.clone(),
        discipline_situation: entry.discipline.situation.clone(),
    })
}

/// Traits with picky eating and snack frequency taken from the preview.
///
/// Unchanged when auto insights are off or there is no preview. A snack flag
/// set by the caregiver is never cleared.
pub fn effective_traits(traits: &ChildTraits, preview: Option<&AutoInsightPreview>) -> ChildTraits {
    match preview {
        Some(preview) if traits.use_auto_insights => ChildTraits {
            picky_eating: preview.picky_auto,
            snack_often: traits.snack_often || preview.snack_often_auto,
            ..traits.clone()
        },
        _ => traits.clone(),
    }
}
