use chrono::{DateTime, Utc};

use crate::core::experience::total_experience_years_at;
use crate::models::{CandidateProfile, JobPosting, LocationType};

/// Factor weights. These are scoring policy, fixed by product, and are not
/// read from configuration.
const SKILLS_WEIGHT: f64 = 40.0;
const EXPERIENCE_WEIGHT: f64 = 30.0;
const LOCATION_WEIGHT: f64 = 15.0;
const EDUCATION_WEIGHT: f64 = 15.0;

/// Calculate a match score (0-100) between a candidate and a job posting
///
/// Scoring formula:
/// score = (
///     skills_score        # 40 - required-skills coverage, fractional
///     + experience_score  # 30 - years vs. required, fractional below threshold
///     + location_score    # 15 - all or nothing, remote always matches
///     + education_score   # 15 - all or nothing
/// )
///
/// A posting with no requirement for a factor awards that factor in full.
/// Only the final sum is rounded; factors carry fractions.
pub fn calculate_match_score(candidate: &CandidateProfile, job: &JobPosting) -> u8 {
    calculate_match_score_at(candidate, job, Utc::now())
}

/// Same as [`calculate_match_score`] but with an explicit clock for the
/// experience factor, so callers (and tests) can pin "now".
pub fn calculate_match_score_at(
    candidate: &CandidateProfile,
    job: &JobPosting,
    now: DateTime<Utc>,
) -> u8 {
    let total = skills_score(candidate, job)
        + experience_score(candidate, job, now)
        + location_score(candidate, job)
        + education_score(candidate, job);

    total.round().clamp(0.0, 100.0) as u8
}

/// Fraction of required skills covered by the candidate, scaled to 40.
#[inline]
fn skills_score(candidate: &CandidateProfile, job: &JobPosting) -> f64 {
    if job.required_skills.is_empty() {
        return SKILLS_WEIGHT;
    }

    let matched = job
        .required_skills
        .iter()
        .filter(|required| {
            candidate
                .skills
                .iter()
                .any(|skill| fuzzy_contains(skill, required))
        })
        .count();

    SKILLS_WEIGHT * matched as f64 / job.required_skills.len() as f64
}

/// Experience sufficiency scaled to 30, with fractional credit below the
/// required threshold.
#[inline]
fn experience_score(candidate: &CandidateProfile, job: &JobPosting, now: DateTime<Utc>) -> f64 {
    if job.required_experience <= 0.0 {
        return EXPERIENCE_WEIGHT;
    }

    let years = total_experience_years_at(&candidate.experience, now);
    if years >= job.required_experience {
        return EXPERIENCE_WEIGHT;
    }

    (EXPERIENCE_WEIGHT * years / job.required_experience).clamp(0.0, EXPERIENCE_WEIGHT)
}

/// Location match, all or nothing. Remote postings match any candidate.
#[inline]
fn location_score(candidate: &CandidateProfile, job: &JobPosting) -> f64 {
    if job.location_type == LocationType::Remote {
        return LOCATION_WEIGHT;
    }

    let matched = fuzzy_contains(&candidate.location, &job.city)
        || contains_ci(&candidate.location, &job.location);

    if matched {
        LOCATION_WEIGHT
    } else {
        0.0
    }
}

/// Education match, all or nothing. No requirement awards in full.
#[inline]
fn education_score(candidate: &CandidateProfile, job: &JobPosting) -> f64 {
    let required = match &job.required_education {
        Some(required) if !required.is_empty() => required,
        _ => return EDUCATION_WEIGHT,
    };

    let matched = candidate
        .education
        .iter()
        .any(|entry| fuzzy_contains(&entry.degree, required));

    if matched {
        EDUCATION_WEIGHT
    } else {
        0.0
    }
}

/// Case-insensitive containment in either direction. Empty strings never
/// match: an absent candidate field cannot satisfy a requirement, and an
/// empty string would otherwise be contained in everything.
#[inline]
fn fuzzy_contains(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// One-directional case-insensitive containment with the same empty-string
/// guard.
#[inline]
fn contains_ci(haystack: &str, needle: &str) -> bool {
    if haystack.is_empty() || needle.is_empty() {
        return false;
    }

    haystack.to_lowercase().contains(&needle.to_lowercase())
}
