use serde::{Deserialize, Serialize};

use crate::models::domain::{JobPosting, MatchCategory};

/// Response for the single-pair scoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ScoreMatchResponse {
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    pub category: MatchCategory,
}

/// One ranked posting in a recommendation response
#[derive(Debug, Clone, Serialize)]
pub struct RecommendedJob {
    pub job: JobPosting,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    pub category: MatchCategory,
}

/// Response for the recommendation endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RecommendJobsResponse {
    pub matches: Vec<RecommendedJob>,
    #[serde(rename = "totalJobs")]
    pub total_jobs: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
