/// Age range in months with the base guide lines for that stage.
/// Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBucket {
    pub min_months: u32,
    pub max_months: u32,
    pub play: &'static str,
    pub education: &'static str,
    pub nutrition: &'static str,
}

impl AgeBucket {
    pub fn contains(&self, months: u32) -> bool {
        months >= self.min_months && months <= self.max_months
    }
}
