use std::fmt;

/// Completion rates a caregiver can pick for a meal
pub const ALLOWED_COMPLETION_RATES: [u32; 4] = [0, 50, 100, 125];

/// Upper bound of the supported age range in months
pub const MAX_TRACKED_MONTHS: u32 = 84;

/// When a snack was eaten, relative to one of the three meals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnackTiming {
    BeforeBreakfast,
    AfterBreakfast,
    BeforeLunch,
    AfterLunch,
    BeforeDinner,
    AfterDinner,
}

impl SnackTiming {
    pub const ALL: [SnackTiming; 6] = [
        SnackTiming::BeforeBreakfast,
        SnackTiming::AfterBreakfast,
        SnackTiming::BeforeLunch,
        SnackTiming::AfterLunch,
        SnackTiming::BeforeDinner,
        SnackTiming::AfterDinner,
    ];

    /// Token stored on `SnackItem::timing`
    pub fn label(&self) -> &'static str {
        match self {
            SnackTiming::BeforeBreakfast => "아침 전",
            SnackTiming::AfterBreakfast => "아침 후",
            SnackTiming::BeforeLunch => "점심 전",
            SnackTiming::AfterLunch => "점심 후",
            SnackTiming::BeforeDinner => "저녁 전",
            SnackTiming::AfterDinner => "저녁 후",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        Self::ALL.into_iter().find(|timing| timing.label() == token)
    }
}

impl fmt::Display for SnackTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiaryError {
    #[error("Invalid completion rate {rate} for {meal}; expected one of 0, 50, 100, 125")]
    InvalidCompletionRate { meal: &'static str, rate: u32 },
    #[error("Invalid snack timing: {0}")]
    InvalidSnackTiming(String),
    #[error("Snack name cannot be empty")]
    EmptySnackName,
    #[error("Snack not found: {0}")]
    SnackNotFound(String),
    #[error("{nutrient} grams cannot be negative")]
    NegativeMacro { nutrient: &'static str },
    #[error("Months must be between 0 and 84, got {0}")]
    MonthsOutOfRange(i64),
}
