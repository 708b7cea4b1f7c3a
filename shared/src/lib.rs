use serde::{Deserialize, Serialize};

/// Child gender, used for theming on the client and stored on every entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Girl,
    Boy,
}

/// How often the child refuses food, as reported by the caregiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PickyEating {
    #[default]
    #[serde(rename = "none")]
    NoIssue,
    #[serde(rename = "some")]
    Some,
    #[serde(rename = "severe")]
    Severe,
}

/// Sleep problem reported by the caregiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SleepIssue {
    #[default]
    #[serde(rename = "none")]
    NoIssue,
    /// Takes a long time to fall asleep
    HardToSleep,
    /// Wakes up often during the night
    FrequentWake,
}

/// Caregiver-declared traits used to personalize the guide.
///
/// Every field has a default so partially stored documents still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChildTraits {
    pub picky_eating: PickyEating,
    pub sleep_issue: SleepIssue,
    pub language_concern: bool,
    pub gross_motor_concern: bool,
    pub fine_motor_concern: bool,
    pub snack_often: bool,
    /// Opt-in gate for rules driven by the most recent diary entry
    pub use_auto_insights: bool,
}

impl Default for ChildTraits {
    fn default() -> Self {
        Self {
            picky_eating: PickyEating::NoIssue,
            sleep_issue: SleepIssue::NoIssue,
            language_concern: false,
            gross_motor_concern: false,
            fine_motor_concern: false,
            snack_often: false,
            use_auto_insights: true,
        }
    }
}

/// A snack eaten during the day.
/// `timing` is one of "아침 전", "아침 후", "점심 전", "점심 후", "저녁 전", "저녁 후".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnackItem {
    pub id: String,
    pub name: String,
    pub count: u32,
    pub timing: String,
}

/// Meals, snacks and optional macro-nutrient grams for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default)]
    pub breakfast_menu: String,
    /// Completion rate in percent: 0, 50, 100 or 125 (ate more than offered)
    pub breakfast_rate: u32,
    #[serde(default)]
    pub lunch_menu: String,
    pub lunch_rate: u32,
    #[serde(default)]
    pub dinner_menu: String,
    pub dinner_rate: u32,
    /// Daily carbohydrate total in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
    #[serde(default)]
    pub snacks: Vec<SnackItem>,
}

impl Nutrition {
    /// Completion rates in breakfast, lunch, dinner order
    pub fn meal_rates(&self) -> [u32; 3] {
        [self.breakfast_rate, self.lunch_rate, self.dinner_rate]
    }
}

impl Default for Nutrition {
    fn default() -> Self {
        Self {
            breakfast_menu: String::new(),
            breakfast_rate: 100,
            lunch_menu: String::new(),
            lunch_rate: 100,
            dinner_menu: String::new(),
            dinner_rate: 100,
            carbs_g: None,
            protein_g: None,
            fat_g: None,
            snacks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayRecord {
    pub fine_motor: String,
    pub gross_motor: String,
    pub books: String,
}

/// Discipline events recorded for the day
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisciplineRecord {
    /// Number of times the child was scolded
    pub count: u32,
    /// Detailed description of the situation
    pub situation: String,
    /// Keyword summary of the misbehavior
    pub behavior: String,
}

/// One diary entry. Created on submission and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: String,
    /// Local date of submission (YYYY-MM-DD)
    pub date: String,
    pub months: u32,
    pub gender: Gender,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub play: PlayRecord,
    pub nutrition: Nutrition,
    #[serde(default)]
    pub milestone: String,
    #[serde(default)]
    pub discipline: DisciplineRecord,
}

/// Personalized guide. Each section is a newline-joined list of advice lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideData {
    pub play: String,
    pub education: String,
    pub nutrition: String,
    /// Only present when at least one discipline rule fired
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discipline: Option<String>,
}

/// Split a guide section into display bullets, stripping a leading "•" marker.
pub fn guide_bullets(section: &str) -> Vec<String> {
    section
        .lines()
        .map(|line| {
            let line = line.trim();
            match line.strip_prefix('•') {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest).to_string(),
                None => line.to_string(),
            }
        })
        .filter(|line| !line.is_empty())
        .collect()
}

/// Request to compose a guide from explicitly supplied inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposeGuideRequest {
    pub months: f64,
    #[serde(default)]
    pub traits: ChildTraits,
    #[serde(default)]
    pub latest_entry: Option<DiaryEntry>,
}

/// Query for the guide built from stored state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GuideQuery {
    /// Overrides the profile's age when present
    pub months: Option<f64>,
}

/// The child currently being tracked
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChildProfile {
    pub months: u32,
    pub gender: Gender,
}

impl Default for ChildProfile {
    fn default() -> Self {
        Self {
            months: 12,
            gender: Gender::Girl,
        }
    }
}

/// Caregiver submission; id, date, months and gender are assigned by the server
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewDiaryEntryRequest {
    pub image_url: Option<String>,
    pub play: PlayRecord,
    pub nutrition: Nutrition,
    pub milestone: String,
    pub discipline: DisciplineRecord,
}

/// Add a snack to an entry draft's nutrition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddSnackRequest {
    pub nutrition: Nutrition,
    pub name: String,
    /// One of the six snack timing tokens
    pub timing: String,
}

/// Change the count of a snack in an entry draft's nutrition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustSnackRequest {
    pub nutrition: Nutrition,
    pub snack_id: String,
    pub delta: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntryListResponse {
    /// Newest first
    pub entries: Vec<DiaryEntry>,
}

/// Summary of the latest entry shown next to the traits form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoInsightPreview {
    pub avg_completion_rate: f64,
    pub total_snacks: u32,
    pub picky_auto: PickyEating,
    pub snack_often_auto: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
    pub discipline_count: u32,
    pub discipline_behavior: String,
    pub discipline_situation: String,
}
