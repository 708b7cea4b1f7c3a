//! Advice driven by the most recent diary entry.

use tracing::debug;

use super::models::entry_insight::{BehaviorCategory, EntryInsight};
use super::models::guide_sections::InsightAdvice;
use super::models::macro_split::MacroSplit;

const LOW_COMPLETION: &str = "• 최근 식사량(완식)이 낮은 편이라면 ‘양’보다 ‘규칙’에 집중해보세요: 식사시간 20~30분, 종료 후 간식 X.";
const SKIPPED_MEAL: &str = "• 끼니를 자주 거르면 다음 끼니 폭식/간식 과다로 이어질 수 있어, ‘작게라도 규칙적으로’가 좋아요.";
const TOO_MANY_SNACKS: &str = "• 최근 간식 총량이 많은 편입니다. ‘정해진 시간 1회’로 먼저 줄이고, 종류는 과일/요거트 위주로 바꿔보세요.";
const AFTER_DINNER_SNACK: &str = "• ‘저녁 후 간식’은 수면을 방해할 수 있어 물/우유 정도로 마무리하는 것을 추천합니다.";
const SUGARY_SNACK_CAP: &str = "• 당류 간식(과자/주스 등)이 포함되어 있다면 주 1~2회로 한도를 정해보세요.";
const ADD_PROTEIN: &str = "• 단백질 비중이 낮아 보입니다. 매 끼니 ‘단백질 1가지’(달걀/두부/생선/살코기/그릭요거트)를 추가해보세요.";
const ADD_HEALTHY_FAT: &str = "• 지방 비중이 너무 낮으면 포만감이 떨어질 수 있어요. 견과류(알레르기 주의), 아보카도, 올리브유 등 ‘좋은 지방’을 소량 추가해보세요.";
const CARBS_LAST: &str = "• 탄수화물 비중이 높다면 단백질/채소를 먼저 먹고, 탄수화물은 뒤로 미루는 방식도 도움이 됩니다.";

const NO_SCOLDING_TODAY: &str = "• 오늘은 혼냄 없이 상황을 정리하셨어요. 좋은 기록 습관입니다!";
const SHORT_CONSISTENT: &str = "• 훈육은 ‘짧고 일관되게’가 핵심입니다: (규칙 1문장) → (즉시 결과) → (대안 행동 제시).";
const BRIEF_EXPLANATION: &str = "• 아이가 진정되면 ‘왜 안 되는지’ 설명은 길게 하지 말고 1~2문장으로 끝내세요.";
const COOLDOWN: &str = "• 훈육 횟수가 많은 날은 부모/아이 모두 에너지가 고갈된 상태일 수 있어요. 안전만 확보하고 ‘쿨다운 5분’ 후 다시 시도해보세요.";
const FEWER_RULES: &str = "• 규칙을 1~2개로 줄여(예: 던지기 금지, 때리기 금지) 성공 경험을 먼저 만들면 횟수가 줄어듭니다.";

const THROWING_ALTERNATIVE: &str = "• ‘던지면 치운다’ 규칙을 고정하고, 던질 수 있는 대체물(말랑 공/쿠션)을 따로 제공해보세요.";
const AGGRESSION_STOP: &str = "• 공격 행동은 즉시 제지(안전) → 짧게 “몸은 아프게 하면 안 돼” → 대안(손잡기/말로하기)을 반복해주세요.";
const AGGRESSION_TRIGGERS: &str = "• 반복되면 피곤/배고픔/경쟁 상황이 트리거인 경우가 많아, ‘발생 직전 신호’를 기록해보세요.";
const TANTRUM_EMPATHY: &str = "• 감정 폭발 때는 설득보다 공감(“속상했구나”)→선택지 2개(“A할래, B할래?”)가 효과적입니다.";
const REFUSAL_CHOICES: &str = "• ‘선택권’을 작게 주면 거부가 줄어듭니다. (예: 빨간 컵 vs 파란 컵, 먼저 양치 vs 먼저 책)";
const SAFETY_BLOCK: &str = "• 안전 관련 행동은 ‘즉시 차단 + 대안 제시’가 우선입니다. (설명은 짧게, 반복은 많이)";

const LOW_COMPLETION_BELOW: f64 = 80.0;
const MANY_SNACKS_FROM: u32 = 3;
const LOW_PROTEIN_BELOW_PCT: i64 = 12;
const LOW_FAT_BELOW_PCT: i64 = 15;
/// Low-fat advice only applies up to this age
const LOW_FAT_UNTIL_MONTHS: u32 = 36;
const HIGH_CARB_ABOVE_PCT: i64 = 70;
const FREQUENT_DISCIPLINE_FROM: u32 = 3;

/// Advice lines for a matched behavior category
pub fn category_advice(category: BehaviorCategory) -> &'static [&'static str] {
    match category {
        BehaviorCategory::Throwing => &[THROWING_ALTERNATIVE],
        BehaviorCategory::Aggression => &[AGGRESSION_STOP, AGGRESSION_TRIGGERS],
        BehaviorCategory::Tantrum => &[TANTRUM_EMPATHY],
        BehaviorCategory::Refusal => &[REFUSAL_CHOICES],
        BehaviorCategory::SafetyHazard => &[SAFETY_BLOCK],
    }
}

/// Summary line for the recorded macro split
pub fn macro_summary_line(split: &MacroSplit) -> String {
    format!(
        "• 탄/단/지(대략): 탄 {}%, 단 {}%, 지 {}% (약 {}kcal)",
        split.carb_pct, split.protein_pct, split.fat_pct, split.total_kcal
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InsightRuleEngine;

impl InsightRuleEngine {
    pub fn new() -> Self {
        Self
    }

    /// Nutrition and discipline lines for one entry's insight.
    /// `months` is the already clamped age.
    pub fn apply(&self, insight: &EntryInsight, months: u32) -> InsightAdvice {
        let mut advice = InsightAdvice::default();
        self.apply_nutrition_rules(insight, months, &mut advice.nutrition);
        self.apply_discipline_rules(insight, &mut advice.discipline);

        debug!(
            "Insight rules fired: nutrition {}, discipline {} lines",
            advice.nutrition.len(),
            advice.discipline.len()
        );
        advice
    }

    fn apply_nutrition_rules(&self, insight: &EntryInsight, months: u32, lines: &mut Vec<String>) {
        if insight.avg_completion_rate < LOW_COMPLETION_BELOW {
            lines.push(LOW_COMPLETION.to_string());
        }
        if insight.any_meal_zero {
            lines.push(SKIPPED_MEAL.to_string());
        }
        if insight.total_snack_count >= MANY_SNACKS_FROM {
            lines.push(TOO_MANY_SNACKS.to_string());
        }
        if insight.after_dinner_snack_count >= 1 {
            lines.push(AFTER_DINNER_SNACK.to_string());
        }
        if insight.has_sugary_snack {
            lines.push(SUGARY_SNACK_CAP.to_string());
        }

        if let Some(split) = &insight.macro_split {
            lines.push(macro_summary_line(split));
            if split.protein_pct < LOW_PROTEIN_BELOW_PCT {
                lines.push(ADD_PROTEIN.to_string());
            }
            if split.fat_pct < LOW_FAT_BELOW_PCT && months <= LOW_FAT_UNTIL_MONTHS {
                lines.push(ADD_HEALTHY_FAT.to_string());
            }
            if split.carb_pct > HIGH_CARB_ABOVE_PCT {
                lines.push(CARBS_LAST.to_string());
            }
        }
    }

    fn apply_discipline_rules(&self, insight: &EntryInsight, lines: &mut Vec<String>) {
        let count = insight.discipline_count;

        if count == 0 && insight.has_discipline_notes() {
            lines.push(NO_SCOLDING_TODAY.to_string());
        }
        if count >= 1 {
            lines.push(SHORT_CONSISTENT.to_string());
            lines.push(BRIEF_EXPLANATION.to_string());
        }
        if count >= FREQUENT_DISCIPLINE_FROM {
            lines.push(COOLDOWN.to_string());
            lines.push(FEWER_RULES.to_string());
        }

        for category in &insight.behavior_categories {
            lines.extend(category_advice(*category).iter().map(|line| line.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral_insight() -> EntryInsight {
        EntryInsight {
            avg_completion_rate: 100.0,
            any_meal_zero: false,
            total_snack_count: 0,
            after_dinner_snack_count: 0,
            has_sugary_snack: false,
            macro_split: None,
            discipline_count: 0,
            behavior: String::new(),
            situation: String::new(),
            behavior_categories: Vec::new(),
        }
    }

    fn split(carb_pct: i64, protein_pct: i64, fat_pct: i64) -> MacroSplit {
        MacroSplit {
            carb_pct,
            protein_pct,
            fat_pct,
            total_kcal: 500,
        }
    }

    #[test]
    fn test_neutral_entry_adds_nothing() {
        let advice = InsightRuleEngine::new().apply(&neutral_insight(), 24);

        assert!(advice.is_empty());
    }

    #[test]
    fn test_meal_and_snack_rules_in_order() {
        let insight = EntryInsight {
            avg_completion_rate: 50.0,
            any_meal_zero: true,
            total_snack_count: 3,
            after_dinner_snack_count: 2,
            has_sugary_snack: true,
            ..neutral_insight()
        };

        let advice = InsightRuleEngine::new().apply(&insight, 24);

        assert_eq!(
            advice.nutrition,
            vec![
                LOW_COMPLETION.to_string(),
                SKIPPED_MEAL.to_string(),
                TOO_MANY_SNACKS.to_string(),
                AFTER_DINNER_SNACK.to_string(),
                SUGARY_SNACK_CAP.to_string(),
            ]
        );
        assert!(advice.discipline.is_empty());
    }

    #[test]
    fn test_completion_threshold_is_strict() {
        let insight = EntryInsight {
            avg_completion_rate: 80.0,
            ..neutral_insight()
        };

        let advice = InsightRuleEngine::new().apply(&insight, 24);
        assert!(advice.nutrition.is_empty());
    }

    #[test]
    fn test_macro_summary_always_emitted() {
        let insight = EntryInsight {
            macro_split: Some(split(54, 22, 24)),
            ..neutral_insight()
        };

        let advice = InsightRuleEngine::new().apply(&insight, 24);
        assert_eq!(advice.nutrition, vec!["• 탄/단/지(대략): 탄 54%, 단 22%, 지 24% (약 500kcal)".to_string()]);
    }

    #[test]
    fn test_macro_imbalance_rules() {
        let insight = EntryInsight {
            macro_split: Some(split(80, 10, 10)),
            ..neutral_insight()
        };

        let young = InsightRuleEngine::new().apply(&insight, 36);
        assert_eq!(
            &young.nutrition[1..],
            &[
                ADD_PROTEIN.to_string(),
                ADD_HEALTHY_FAT.to_string(),
                CARBS_LAST.to_string()
            ]
        );

        let older = InsightRuleEngine::new().apply(&insight, 37);
        assert_eq!(&older.nutrition[1..], &[ADD_PROTEIN.to_string(), CARBS_LAST.to_string()]);
    }

    #[test]
    fn test_discipline_count_rules() {
        let engine = InsightRuleEngine::new();

        let calm = EntryInsight {
            behavior: "장난감 정리 거부".to_string(),
            ..neutral_insight()
        };
        let advice = engine.apply(&calm, 24);
        assert_eq!(advice.discipline, vec![NO_SCOLDING_TODAY.to_string()]);

        let once = EntryInsight {
            discipline_count: 1,
            ..neutral_insight()
        };
        assert_eq!(
            engine.apply(&once, 24).discipline,
            vec![SHORT_CONSISTENT.to_string(), BRIEF_EXPLANATION.to_string()]
        );

        let often = EntryInsight {
            discipline_count: 3,
            ..neutral_insight()
        };
        assert_eq!(
            engine.apply(&often, 24).discipline,
            vec![
                SHORT_CONSISTENT.to_string(),
                BRIEF_EXPLANATION.to_string(),
                COOLDOWN.to_string(),
                FEWER_RULES.to_string(),
            ]
        );
    }

    #[test]
    fn test_zero_count_without_notes_is_silent() {
        let advice = InsightRuleEngine::new().apply(&neutral_insight(), 24);
        assert!(advice.discipline.is_empty());
    }

    #[test]
    fn test_behavior_categories_each_add_lines() {
        let insight = EntryInsight {
            discipline_count: 1,
            behavior: "던지기 때리기".to_string(),
            behavior_categories: vec![BehaviorCategory::Throwing, BehaviorCategory::Aggression],
            ..neutral_insight()
        };

        let advice = InsightRuleEngine::new().apply(&insight, 24);
        assert_eq!(
            &advice.discipline[2..],
            &[
                THROWING_ALTERNATIVE.to_string(),
                AGGRESSION_STOP.to_string(),
                AGGRESSION_TRIGGERS.to_string(),
            ]
        );
    }

    #[test]
    fn test_category_advice_line_counts() {
        assert_eq!(category_advice(BehaviorCategory::Throwing).len(), 1);
        assert_eq!(category_advice(BehaviorCategory::Aggression).len(), 2);
        assert_eq!(category_advice(BehaviorCategory::Tantrum).len(), 1);
        assert_eq!(category_advice(BehaviorCategory::Refusal).len(), 1);
        assert_eq!(category_advice(BehaviorCategory::SafetyHazard).len(), 1);
    }
}
