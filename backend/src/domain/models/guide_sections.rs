use super::age_bucket::AgeBucket;

/// Play, education and nutrition lines after the trait rules ran.
/// Each list starts from the base bucket line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TraitAdvice {
    pub play: Vec<String>,
    pub education: Vec<String>,
    pub nutrition: Vec<String>,
}

impl TraitAdvice {
    pub fn seeded(base: &AgeBucket) -> Self {
        Self {
            play: vec![base.play.to_string()],
            education: vec![base.education.to_string()],
            nutrition: vec![base.nutrition.to_string()],
        }
    }
}

/// Lines contributed by the most recent diary entry
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InsightAdvice {
    pub nutrition: Vec<String>,
    pub discipline: Vec<String>,
}

impl InsightAdvice {
    pub fn is_empty(&self) -> bool {
        self.nutrition.is_empty() && self.discipline.is_empty()
    }
}

/// Raw, not yet de-duplicated lines for every guide section
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GuideSections {
    pub play: Vec<String>,
    pub education: Vec<String>,
    pub nutrition: Vec<String>,
    pub discipline: Vec<String>,
}

impl From<TraitAdvice> for GuideSections {
    fn from(advice: TraitAdvice) -> Self {
        Self {
            play: advice.play,
            education: advice.education,
            nutrition: advice.nutrition,
            discipline: Vec::new(),
        }
    }
}

impl GuideSections {
    pub fn merge_insights(&mut self, insights: InsightAdvice) {
        self.nutrition.extend(insights.nutrition);
        self.discipline.extend(insights.discipline);
    }
}
