//! Advice driven by caregiver-declared traits.
//!
//! Every rule is evaluated on its own and several may fire for the same
//! traits. Lines are appended in rule order; the composer's de-duplication
//! keeps the first occurrence, so the order here is part of the output.

use shared::{ChildTraits, PickyEating, SleepIssue};
use tracing::debug;

use super::models::age_bucket::AgeBucket;
use super::models::guide_sections::TraitAdvice;

const WIND_DOWN_ROUTINE: &str = "• 취침 전 20~30분은 조용한 루틴(조명 낮추기, 책 1권, 동일한 자장가)으로 ‘잠 신호’를 반복해주세요.";
const DAYTIME_SUNLIGHT: &str = "• 낮 시간에 햇빛(산책 15~30분)과 신체 놀이로 에너지를 쓰면 밤잠 전환이 쉬워집니다.";
const NIGHT_WAKING_RESPONSE: &str = "• 밤중 각성은 ‘완전 깨지 않게’ 짧고 동일한 방식(토닥임/속삭임)으로 대응하고, 자극(불빛/대화)은 최소화하세요.";
const NO_LATE_SUGAR: &str = "• 늦은 시간 당류 간식/주스는 각성을 늘릴 수 있어 저녁 이후는 물 위주로 정리해보세요.";

const TALK_AND_WAIT: &str = "• ‘말 걸기 + 기다리기(3초)’를 반복하세요. 아이가 소리/제스처로라도 반응하면 바로 확장해 말해줍니다. (예: “공!” → “빨간 공 굴리자”)";
const WHERE_QUESTIONS: &str = "• 질문은 “이거 뭐야?”보다 “어디 있지?”처럼 찾기 질문이 부담이 덜해요.";
const LANGUAGE_SCREENING: &str = "• 또래 대비 걱정이 지속되면 소아과/발달센터에 선별검사(언어) 상담을 받아보는 것도 도움이 됩니다.";

const SHORT_FREQUENT_GROSS_MOTOR: &str = "• 대근육은 ‘짧게 자주’가 좋아요: 하루 3회 × 5분(계단 오르내리기 보조/공 굴리기/균형 잡기)처럼 쪼개보세요.";
const LOWER_DIFFICULTY: &str = "• 성공 경험을 위해 난이도를 한 단계 낮추고(손잡이/벽 짚기), 점진적으로 보조를 줄입니다.";
const FINE_MOTOR_BASICS: &str = "• 소근육은 집기/끼우기/찢기/붙이기 4종이 기본입니다. (콩 집기, 스티커 붙이기, 종이 찢기, 끈 끼우기)";
const FREE_DRAWING: &str = "• ‘따라 그리기’보다 ‘자유 그리기 + 이름 붙이기’가 부담이 적고 지속하기 좋아요.";

const ONE_BITE_RULE: &str = "• 편식은 ‘한 입 규칙 + 선택지 2개’가 효과적입니다. (예: 브로콜리 1입 vs 당근 1입, 둘 중 선택)";
const RE_EXPOSURE: &str = "• 같은 재료도 조리법/모양을 바꿔 재노출(10~15회)하면 수용도가 올라갑니다.";
const SAFE_FOOD_FIRST: &str = "• 편식이 심하면 ‘주식은 안전식 + 신식은 소량’ 원칙으로 스트레스를 줄이세요. (접시 한 구역만 신식)";
const SIMPLE_MEAL_RULES: &str = "• 식사 규칙 단순화(식사시간 20~30분, 종료 후 간식 X)로 패턴이 안정됩니다.";
const PEDIATRIC_CONSULT: &str = "• 체중/성장곡선이 흔들리거나 식사 거부가 지속되면 소아과 상담으로 영양/철분 체크를 권장합니다.";

const FIXED_SNACK_TIME: &str = "• 간식은 ‘시간과 종류’를 고정하세요. (예: 오후 3시, 과일/요거트 중 1개)";
const WEEKLY_SNACK_CAP: &str = "• 과자/주스는 주 1~2회로 한도를 정하고, 배고픔 신호는 물/과일/우유로 먼저 조절해보세요.";

const INFANCY_FRAMING: &str = "• 영아기에는 수유/수면 패턴을 억지로 맞추기보다 하루 흐름을 기록하며 안정감을 만들어주세요.";

/// Months from which a persistent language concern suggests screening
const LANGUAGE_SCREENING_FROM_MONTHS: u32 = 12;
/// Months from which severe picky eating suggests a pediatric check
const PEDIATRIC_CONSULT_FROM_MONTHS: u32 = 18;
/// Up to this age the nutrition section opens with the infancy line
const INFANCY_UNTIL_MONTHS: u32 = 6;

#[derive(Debug, Clone, Copy, Default)]
pub struct TraitRuleEngine;

impl TraitRuleEngine {
    pub fn new() -> Self {
        Self
    }

    /// Base lines followed by every trait rule that fires for `traits`.
    /// `months` is the already clamped age.
    pub fn apply(&self, months: u32, traits: &ChildTraits, base: &AgeBucket) -> TraitAdvice {
        let mut advice = TraitAdvice::seeded(base);

        match traits.sleep_issue {
            SleepIssue::HardToSleep => {
                push(&mut advice.education, WIND_DOWN_ROUTINE);
                push(&mut advice.play, DAYTIME_SUNLIGHT);
            }
            SleepIssue::FrequentWake => {
                push(&mut advice.education, NIGHT_WAKING_RESPONSE);
                push(&mut advice.nutrition, NO_LATE_SUGAR);
            }
            SleepIssue::NoIssue => {}
        }

        if traits.language_concern {
            push(&mut advice.education, TALK_AND_WAIT);
            push(&mut advice.education, WHERE_QUESTIONS);
            if months >= LANGUAGE_SCREENING_FROM_MONTHS {
                push(&mut advice.education, LANGUAGE_SCREENING);
            }
        }

        if traits.gross_motor_concern {
            push(&mut advice.play, SHORT_FREQUENT_GROSS_MOTOR);
            push(&mut advice.play, LOWER_DIFFICULTY);
        }
        if traits.fine_motor_concern {
            push(&mut advice.play, FINE_MOTOR_BASICS);
            push(&mut advice.education, FREE_DRAWING);
        }

        match traits.picky_eating {
            PickyEating::Some => {
                push(&mut advice.nutrition, ONE_BITE_RULE);
                push(&mut advice.nutrition, RE_EXPOSURE);
            }
            PickyEating::Severe => {
                push(&mut advice.nutrition, SAFE_FOOD_FIRST);
                push(&mut advice.nutrition, SIMPLE_MEAL_RULES);
                if months >= PEDIATRIC_CONSULT_FROM_MONTHS {
                    push(&mut advice.nutrition, PEDIATRIC_CONSULT);
                }
            }
            PickyEating::NoIssue => {}
        }

        if traits.snack_often {
            push(&mut advice.nutrition, FIXED_SNACK_TIME);
            push(&mut advice.nutrition, WEEKLY_SNACK_CAP);
        }

        if months <= INFANCY_UNTIL_MONTHS {
            advice.nutrition.insert(0, INFANCY_FRAMING.to_string());
        }

        debug!(
            "Trait rules for {} months: play {}, education {}, nutrition {} lines",
            months,
            advice.play.len(),
            advice.education.len(),
            advice.nutrition.len()
        );
        advice
    }
}

fn push(lines: &mut Vec<String>, line: &str) {
    lines.push(line.to_string());
}
