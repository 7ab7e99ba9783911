// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, EducationEntry, JobPosting, LocationType, MatchCategory, ScoredJob,
    WorkExperience,
};
pub use requests::{RecommendJobsRequest, ScoreMatchRequest};
pub use responses::{
    ErrorResponse, HealthResponse, RecommendJobsResponse, RecommendedJob, ScoreMatchResponse,
};
