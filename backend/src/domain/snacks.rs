//! Snack list editing for a diary entry draft.

use shared::{Nutrition, SnackItem};
use uuid::Uuid;

use super::models::diary::{DiaryError, SnackTiming};

/// Append a snack with count 1. The name is trimmed and must not be blank.
pub fn add_snack<'a>(
    nutrition: &'a mut Nutrition,
    name: &str,
    timing: SnackTiming,
) -> Result<&'a SnackItem, DiaryError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DiaryError::EmptySnackName);
    }

    nutrition.snacks.push(SnackItem {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        count: 1,
        timing: timing.label().to_string(),
    });
    Ok(&nutrition.snacks[nutrition.snacks.len() - 1])
}

/// Change a snack's count by `delta`, never below 0.
/// A snack whose count reaches 0 is removed; its new count is returned.
pub fn adjust_snack_count(
    nutrition: &mut Nutrition,
    snack_id: &str,
    delta: i64,
) -> Result<u32, DiaryError> {
    let index = nutrition
        .snacks
        .iter()
        .position(|snack| snack.id == snack_id)
        .ok_or_else(|| DiaryError::SnackNotFound(snack_id.to_string()))?;

    let current = i64::from(nutrition.snacks[index].count);
    let updated = current.saturating_add(delta).clamp(0, i64::from(u32::MAX)) as u32;
    if updated == 0 {
        nutrition.snacks.remove(index);
    } else {
        nutrition.snacks[index].count = updated;
    }
    Ok(updated)
}
