use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{CandidateProfile, JobPosting};

/// Request to score a single candidate/posting pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreMatchRequest {
    pub candidate: CandidateProfile,
    pub job: JobPosting,
}

/// Request to rank a batch of postings for a candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendJobsRequest {
    pub candidate: CandidateProfile,
    #[validate(length(min = 1))]
    pub jobs: Vec<JobPosting>,
    #[serde(default)]
    pub limit: Option<u16>,
}
