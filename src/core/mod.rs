// Core algorithm exports
pub mod category;
pub mod experience;
pub mod matcher;
pub mod scoring;

pub use category::match_category;
pub use experience::{total_experience_years, total_experience_years_at};
pub use matcher::{recommend_jobs, recommend_jobs_at, MatchResult};
pub use scoring::{calculate_match_score, calculate_match_score_at};
