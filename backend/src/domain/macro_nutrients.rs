//! Carbohydrate / protein / fat energy split.

use super::models::macro_split::MacroSplit;

const CARB_KCAL_PER_G: f64 = 4.0;
const PROTEIN_KCAL_PER_G: f64 = 4.0;
const FAT_KCAL_PER_G: f64 = 9.0;

/// Round half toward positive infinity
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MacroNutrientAnalyzer;

impl MacroNutrientAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Energy-normalized split of the recorded grams.
    ///
    /// Returns `None` when nothing was recorded or the total energy is not positive.
    /// A missing value counts as 0 grams. Non-finite values are treated as missing.
    pub fn analyze(
        &self,
        carbs_g: Option<f64>,
        protein_g: Option<f64>,
        fat_g: Option<f64>,
    ) -> Option<MacroSplit> {
        let carbs = carbs_g.filter(|g| g.is_finite());
        let protein = protein_g.filter(|g| g.is_finite());
        let fat = fat_g.filter(|g| g.is_finite());

        if carbs.is_none() && protein.is_none() && fat.is_none() {
            return None;
        }

        let carb_kcal = carbs.unwrap_or(0.0) * CARB_KCAL_PER_G;
        let protein_kcal = protein.unwrap_or(0.0) * PROTEIN_KCAL_PER_G;
        let fat_kcal = fat.unwrap_or(0.0) * FAT_KCAL_PER_G;
        let total = carb_kcal + protein_kcal + fat_kcal;
        if total <= 0.0 {
            return None;
        }

        Some(MacroSplit {
            carb_pct: round_half_up(carb_kcal / total * 100.0),
            protein_pct: round_half_up(protein_kcal / total * 100.0),
            fat_pct: round_half_up(fat_kcal / total * 100.0),
            total_kcal: round_half_up(total),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_recorded() {
        let analyzer = MacroNutrientAnalyzer::new();

        assert_eq!(analyzer.analyze(None, None, None), None);
    }

    #[test]
    fn test_zero_energy() {
        let analyzer = MacroNutrientAnalyzer::new();

        assert_eq!(analyzer.analyze(Some(0.0), Some(0.0), Some(0.0)), None);
        assert_eq!(analyzer.analyze(Some(0.0), None, None), None);
    }

    #[test]
    fn test_single_value_recorded() {
        let analyzer = MacroNutrientAnalyzer::new();

        let split = analyzer.analyze(Some(100.0), None, None).unwrap();
        assert_eq!(
            split,
            MacroSplit {
                carb_pct: 100,
                protein_pct: 0,
                fat_pct: 0,
                total_kcal: 400,
            }
        );
    }

    #[test]
    fn test_rounding_each_share_independently() {
        let analyzer = MacroNutrientAnalyzer::new();

        // 200 + 80 + 90 = 370 kcal
        let split = analyzer.analyze(Some(50.0), Some(20.0), Some(10.0)).unwrap();
        assert_eq!(split.carb_pct, 54);
        assert_eq!(split.protein_pct, 22);
        assert_eq!(split.fat_pct, 24);
        assert_eq!(split.total_kcal, 370);
    }

    #[test]
    fn test_rounded_shares_may_not_sum_to_100() {
        let analyzer = MacroNutrientAnalyzer::new();

        // 4 / 4 / 9 kcal thirds-ish: 23.5%, 23.5%, 52.9%
        let split = analyzer.analyze(Some(1.0), Some(1.0), Some(1.0)).unwrap();
        assert_eq!(split.carb_pct, 24);
        assert_eq!(split.protein_pct, 24);
        assert_eq!(split.fat_pct, 53);
        assert_eq!(split.carb_pct + split.protein_pct + split.fat_pct, 101);
        assert_eq!(split.total_kcal, 17);
    }

    #[test]
    fn test_non_finite_values_are_ignored() {
        let analyzer = MacroNutrientAnalyzer::new();

        assert_eq!(analyzer.analyze(Some(f64::NAN), None, None), None);
        let split = analyzer.analyze(Some(f64::NAN), Some(10.0), None).unwrap();
        assert_eq!(split.protein_pct, 100);
        assert_eq!(split.total_kcal, 40);
    }
}
