use serde::Serialize;

/// Energy share of each macro-nutrient for one day of records.
///
/// Percentages are rounded independently and may not add up to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroSplit {
    pub carb_pct: i64,
    pub protein_pct: i64,
    pub fat_pct: i64,
    pub total_kcal: i64,
}
