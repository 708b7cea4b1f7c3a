use super::macro_split::MacroSplit;

/// Misbehavior groups recognized in the discipline notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BehaviorCategory {
    /// Throwing or breaking things
    Throwing,
    /// Hitting, pushing, biting
    Aggression,
    /// Crying, screaming, tantrums
    Tantrum,
    /// Refusing or defying requests
    Refusal,
    /// Dangerous places or objects (stairs, road, fire, knives, sockets)
    SafetyHazard,
}

/// Signals derived from a single diary entry
#[derive(Debug, Clone, PartialEq)]
pub struct EntryInsight {
    /// Mean of the three meal completion rates
    pub avg_completion_rate: f64,
    pub any_meal_zero: bool,
    pub total_snack_count: u32,
    pub after_dinner_snack_count: u32,
    pub has_sugary_snack: bool,
    pub macro_split: Option<MacroSplit>,
    pub discipline_count: u32,
    /// Trimmed behavior summary
    pub behavior: String,
    /// Trimmed situation notes
    pub situation: String,
    /// Matched categories in table order
    pub behavior_categories: Vec<BehaviorCategory>,
}

impl EntryInsight {
    pub fn has_discipline_notes(&self) -> bool {
        !self.behavior.is_empty() || !self.situation.is_empty()
    }

    pub fn matches(&self, category: BehaviorCategory) -> bool {
        self.behavior_categories.contains(&category)
    }
}
