use chrono::{DateTime, Utc};

use crate::core::scoring::calculate_match_score_at;
use crate::models::{CandidateProfile, JobPosting, ScoredJob};

/// Result of ranking a batch of postings for one candidate
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredJob>,
    pub total_jobs: usize,
}

/// Rank job postings for a candidate
///
/// Every posting is scored exactly once, then sorted by score descending.
/// The sort is stable, so postings with equal scores keep their input order.
/// When `limit` is given the result is truncated to at most that many
/// entries.
pub fn recommend_jobs(
    candidate: &CandidateProfile,
    jobs: Vec<JobPosting>,
    limit: Option<usize>,
) -> MatchResult {
    recommend_jobs_at(candidate, jobs, limit, Utc::now())
}

/// Same as [`recommend_jobs`] but with an explicit clock for the experience
/// factor.
pub fn recommend_jobs_at(
    candidate: &CandidateProfile,
    jobs: Vec<JobPosting>,
    limit: Option<usize>,
    now: DateTime<Utc>,
) -> MatchResult {
    let total_jobs = jobs.len();

    let mut matches: Vec<ScoredJob> = jobs
        .into_iter()
        .map(|job| {
            let match_score = calculate_match_score_at(candidate, &job, now);
            ScoredJob { job, match_score }
        })
        .collect();

    // Vec::sort_by is stable: ties retain input order
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    if let Some(limit) = limit {
        matches.truncate(limit);
    }

    MatchResult {
        matches,
        total_jobs,
    }
}
