pub mod age_bucket;
pub mod diary;
pub mod entry_insight;
pub mod guide_sections;
pub mod macro_split;
