//! Guide composition.
//!
//! Builds the personalized guide from the age bucket, the trait rules and,
//! when the caregiver opted in, the rules driven by the latest diary entry.
//! Composition is pure: no I/O, no shared state, and the same inputs always
//! produce the same guide.

use shared::{ChildTraits, DiaryEntry, GuideData};
use tracing::debug;

use super::age_buckets::{clamp_months, AgeBucketResolver};
use super::auto_traits;
use super::diary_service::DiaryService;
use super::entry_insights::EntryInsightExtractor;
use super::insight_rules::InsightRuleEngine;
use super::models::guide_sections::GuideSections;
use super::trait_rules::TraitRuleEngine;

#[derive(Debug, Clone, Copy, Default)]
pub struct GuideService {
    resolver: AgeBucketResolver,
    trait_rules: TraitRuleEngine,
    extractor: EntryInsightExtractor,
    insight_rules: InsightRuleEngine,
}

impl GuideService {
    pub fn new() -> Self {
        Self {
            resolver: AgeBucketResolver::new(),
            trait_rules: TraitRuleEngine::new(),
            extractor: EntryInsightExtractor::new(),
            insight_rules: InsightRuleEngine::new(),
        }
    }

    /// Compose the guide for a child of `months` months.
    ///
    /// Entry-driven rules only run when `traits.use_auto_insights` is set and
    /// an entry is supplied. The discipline section is `None` when no
    /// discipline line fired.
    pub fn compose(
        &self,
        months: f64,
        traits: &ChildTraits,
        latest_entry: Option<&DiaryEntry>,
    ) -> GuideData {
        let base = self.resolver.resolve(months);
        let m = clamp_months(months);

        let mut sections = GuideSections::from(self.trait_rules.apply(m, traits, base));

        if traits.use_auto_insights {
            if let Some(entry) = latest_entry {
                let insight = self.extractor.extract(entry);
                sections.merge_insights(self.insight_rules.apply(&insight, m));
            }
        }

        let guide = render_sections(&sections);

        debug!(
            "Composed guide for {} months (auto insights: {}, entry: {}, discipline: {})",
            m,
            traits.use_auto_insights,
            latest_entry.is_some(),
            guide.discipline.is_some()
        );
        guide
    }

    /// Compose from the stored traits, profile and latest entry.
    ///
    /// `months` defaults to the profile age. Picky eating and snack frequency
    /// are taken from the auto-insight preview when the caregiver opted in.
    pub fn compose_from_diary(&self, diary: &DiaryService, months: Option<f64>) -> GuideData {
        let months = months.unwrap_or_else(|| f64::from(diary.get_profile().months));
        let latest = diary.latest_entry();
        let preview = auto_traits::preview(latest.as_ref());
        let traits = auto_traits::effective_traits(&diary.get_traits(), preview.as_ref());

        self.compose(months, &traits, latest.as_ref())
    }
}

/// De-duplicate each section and join its lines.
/// An empty discipline section becomes `None`.
pub fn render_sections(sections: &GuideSections) -> GuideData {
    let discipline = dedup_lines(&sections.discipline);
    GuideData {
        play: dedup_lines(&sections.play).join("\n"),
        education: dedup_lines(&sections.education).join("\n"),
        nutrition: dedup_lines(&sections.nutrition).join("\n"),
        discipline: if discipline.is_empty() {
            None
        } else {
            Some(discipline.join("\n"))
        },
    }
}

/// Trim lines, drop empty ones and keep only the first occurrence of each
pub fn dedup_lines(lines: &[String]) -> Vec<&str> {
    let mut unique: Vec<&str> = Vec::with_capacity(lines.len());
    for line in lines.iter().map(|line| line.trim()) {
        if !line.is_empty() && !unique.contains(&line) {
            unique.push(line);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{
        DisciplineRecord, Gender, Nutrition, PickyEating, PlayRecord, SleepIssue, SnackItem,
    };
    use std::collections::HashSet;

    fn create_test_service() -> GuideService {
        GuideService::new()
    }

    fn quiet_traits(use_auto_insights: bool) -> ChildTraits {
        ChildTraits {
            use_auto_insights,
            ..ChildTraits::default()
        }
    }

    fn create_test_entry() -> DiaryEntry {
        DiaryEntry {
            id: "entry-1".to_string(),
            date: "2025-06-01".to_string(),
            months: 24,
            gender: Gender::Boy,
            image_url: None,
            play: PlayRecord::default(),
            nutrition: Nutrition {
                breakfast_rate: 0,
                lunch_rate: 50,
                dinner_rate: 100,
                carbs_g: Some(50.0),
                protein_g: Some(20.0),
                fat_g: Some(10.0),
                snacks: vec![
                    SnackItem {
                        id: "s1".to_string(),
                        name: "쿠키".to_string(),
                        count: 2,
                        timing: "저녁 후".to_string(),
                    },
                    SnackItem {
                        id: "s2".to_string(),
                        name: "사과".to_string(),
                        count: 1,
                        timing: "아침 전".to_string(),
                    },
                ],
                ..Nutrition::default()
            },
            milestone: String::new(),
            discipline: DisciplineRecord {
                count: 1,
                situation: "놀이터".to_string(),
                behavior: "던지기 때리기".to_string(),
            },
        }
    }

    fn lines(section: &str) -> Vec<&str> {
        section.split('\n').collect()
    }

    #[test]
    fn test_base_guide_without_traits_or_entry() {
        let service = create_test_service();
        let base = AgeBucketResolver::new().resolve(20.0);

        let guide = service.compose(20.0, &quiet_traits(true), None);

        assert_eq!(guide.play, base.play);
        assert_eq!(guide.education, base.education);
        assert_eq!(guide.nutrition, base.nutrition);
        assert_eq!(guide.discipline, None);
    }

    #[test]
    fn test_discipline_omitted_for_infant_without_entry() {
        let service = create_test_service();

        let guide = service.compose(6.0, &quiet_traits(false), None);

        assert!(guide.discipline.is_none());
        // infancy framing line comes first
        assert_eq!(lines(&guide.nutrition).len(), 2);
    }

    #[test]
    fn test_opted_out_ignores_entry() {
        let service = create_test_service();
        let traits = ChildTraits {
            picky_eating: PickyEating::Some,
            sleep_issue: SleepIssue::FrequentWake,
            use_auto_insights: false,
            ..ChildTraits::default()
        };
        let entry = create_test_entry();

        let with_entry = service.compose(24.0, &traits, Some(&entry));
        let without_entry = service.compose(24.0, &traits, None);

        assert_eq!(with_entry, without_entry);
        assert!(with_entry.discipline.is_none());
    }

    #[test]
    fn test_opted_in_entry_rules_fire() {
        let service = create_test_service();
        let entry = create_test_entry();

        let guide = service.compose(24.0, &quiet_traits(true), Some(&entry));

        let nutrition = lines(&guide.nutrition);
        assert!(nutrition.iter().any(|l| l.contains("간식 총량")));
        assert!(nutrition.iter().any(|l| l.contains("저녁 후 간식")));
        assert!(nutrition.iter().any(|l| l.contains("탄 54%, 단 22%, 지 24% (약 370kcal)")));

        let discipline = guide.discipline.expect("discipline lines expected");
        assert!(discipline.contains("던질 수 있는 대체물"));
        assert!(discipline.contains("공격 행동은 즉시 제지"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let service = create_test_service();
        let traits = ChildTraits {
            language_concern: true,
            snack_often: true,
            ..ChildTraits::default()
        };
        let entry = create_test_entry();

        let first = service.compose(30.0, &traits, Some(&entry));
        let second = service.compose(30.0, &traits, Some(&entry));

        assert_eq!(first, second);
    }

    #[test]
    fn test_sections_never_repeat_a_line() {
        let service = create_test_service();
        let traits = ChildTraits {
            picky_eating: PickyEating::Severe,
            sleep_issue: SleepIssue::FrequentWake,
            language_concern: true,
            gross_motor_concern: true,
            fine_motor_concern: true,
            snack_often: true,
            use_auto_insights: true,
        };

        let guide = service.compose(24.0, &traits, Some(&create_test_entry()));

        let discipline = guide.discipline.clone().unwrap_or_default();
        for section in [&guide.play, &guide.education, &guide.nutrition, &discipline] {
            let all = lines(section);
            let unique: HashSet<&str> = all.iter().copied().collect();
            assert_eq!(unique.len(), all.len());
        }
    }

    #[test]
    fn test_line_fired_by_both_engines_renders_once_at_first_position() {
        let base = AgeBucketResolver::new().resolve(24.0);
        let traits = ChildTraits {
            picky_eating: PickyEating::Severe,
            ..ChildTraits::default()
        };
        let trait_advice = TraitRuleEngine::new().apply(24, &traits, base);
        let safe_food = trait_advice.nutrition[1].clone();
        let mut sections = GuideSections::from(trait_advice);

        let entry = create_test_entry();
        let mut insight_advice = InsightRuleEngine::new()
            .apply(&EntryInsightExtractor::new().extract(&entry), 24);
        let first_insight = insight_advice.nutrition[0].clone();
        insight_advice.nutrition.insert(1, format!("  {} ", safe_food));
        let first_discipline = insight_advice.discipline[0].clone();
        insight_advice.discipline.push(first_discipline.clone());
        sections.merge_insights(insight_advice);

        let guide = render_sections(&sections);

        let nutrition = lines(&guide.nutrition);
        assert_eq!(nutrition.iter().filter(|l| **l == safe_food).count(), 1);
        assert_eq!(nutrition[1], safe_food);
        assert!(nutrition.contains(&first_insight.as_str()));
        let discipline = guide.discipline.unwrap();
        let discipline = lines(&discipline);
        assert_eq!(discipline.iter().filter(|l| **l == first_discipline).count(), 1);
        assert_eq!(discipline[0], first_discipline);
    }

    #[test]
    fn test_render_sections_omits_empty_discipline() {
        let sections = GuideSections {
            play: vec!["놀이".to_string()],
            education: vec!["교육".to_string()],
            nutrition: vec!["영양".to_string(), "영양".to_string()],
            discipline: vec!["   ".to_string()],
        };

        let guide = render_sections(&sections);

        assert_eq!(guide.nutrition, "영양");
        assert!(guide.discipline.is_none());
    }

    #[test]
    fn test_dedup_lines_keeps_first_occurrence() {
        let raw = vec![
            "  첫째 ".to_string(),
            "둘째".to_string(),
            "".to_string(),
            "첫째".to_string(),
            "   ".to_string(),
            "셋째".to_string(),
            "둘째 ".to_string(),
        ];

        assert_eq!(dedup_lines(&raw), vec!["첫째", "둘째", "셋째"]);
    }

    #[test]
    fn test_severe_picky_and_snack_often_opted_out() {
        let service = create_test_service();
        let base = AgeBucketResolver::new().resolve(10.0);
        let traits = ChildTraits {
            picky_eating: PickyEating::Severe,
            sleep_issue: SleepIssue::NoIssue,
            language_concern: false,
            gross_motor_concern: false,
            fine_motor_concern: false,
            snack_often: true,
            use_auto_insights: false,
        };

        let guide = service.compose(10.0, &traits, Some(&create_test_entry()));

        let nutrition = lines(&guide.nutrition);
        assert_eq!(nutrition.len(), 5);
        assert_eq!(nutrition[0], base.nutrition);
        assert!(nutrition[1].contains("안전식"));
        assert!(nutrition[2].contains("식사 규칙 단순화"));
        assert!(nutrition[3].contains("시간과 종류"));
        assert!(nutrition[4].contains("주 1~2회"));
        assert!(guide.discipline.is_none());
    }

    #[test]
    fn test_compose_from_diary_applies_auto_traits() {
        let service = create_test_service();
        let diary = DiaryService::new(5);
        let mut request = shared::NewDiaryEntryRequest::default();
        request.nutrition.breakfast_rate = 0;
        diary.submit_entry(request).unwrap();

        let guide = service.compose_from_diary(&diary, Some(24.0));
        assert!(guide.nutrition.contains("안전식"));

        diary.update_traits(quiet_traits(false));
        let guide = service.compose_from_diary(&diary, Some(24.0));
        assert!(!guide.nutrition.contains("안전식"));
    }

    #[test]
    fn test_compose_from_diary_defaults_to_profile_age() {
        let service = create_test_service();
        let diary = DiaryService::new(5);
        diary
            .update_profile(shared::ChildProfile {
                months: 40,
                gender: Gender::Girl,
            })
            .unwrap();

        assert_eq!(
            service.compose_from_diary(&diary, None),
            service.compose(40.0, &ChildTraits::default(), None)
        );
    }

    #[test]
    fn test_out_of_range_months_clamp() {
        let service = create_test_service();
        let traits = quiet_traits(false);

        assert_eq!(service.compose(-5.0, &traits, None), service.compose(0.0, &traits, None));
        assert_eq!(service.compose(999.0, &traits, None), service.compose(84.0, &traits, None));
        assert_eq!(service.compose(f64::NAN, &traits, None), service.compose(0.0, &traits, None));
    }
}
