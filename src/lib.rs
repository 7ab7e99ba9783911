//! Jobmatch Algo - job/candidate matching engine for the job portal
//!
//! This library provides the deterministic scoring function used to rank job
//! postings against a candidate profile. The engine itself is pure; the HTTP
//! layer in `main.rs` is just a thin shell around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, match_category, recommend_jobs, MatchResult};
pub use models::{
    CandidateProfile, JobPosting, LocationType, MatchCategory, RecommendJobsRequest,
    RecommendJobsResponse, ScoredJob,
};
