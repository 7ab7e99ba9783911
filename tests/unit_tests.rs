// Unit tests for jobmatch-algo

use chrono::{DateTime, Duration, TimeZone, Utc};
use jobmatch_algo::core::{
    category::match_category,
    experience::total_experience_years_at,
    scoring::{calculate_match_score, calculate_match_score_at},
};
use jobmatch_algo::models::{
    CandidateProfile, EducationEntry, JobPosting, LocationType, WorkExperience,
};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn empty_candidate() -> CandidateProfile {
    CandidateProfile {
        skills: vec![],
        experience: vec![],
        location: String::new(),
        education: vec![],
    }
}

fn unconstrained_remote_job() -> JobPosting {
    JobPosting {
        id: None,
        title: None,
        required_skills: vec![],
        required_experience: 0.0,
        location: "Anywhere".to_string(),
        city: "Anywhere".to_string(),
        location_type: LocationType::Remote,
        required_education: None,
    }
}

fn work_entry(start: &str, end: Option<&str>, current: bool) -> WorkExperience {
    WorkExperience {
        start_date: start.to_string(),
        end_date: end.map(|e| e.to_string()),
        current,
        title: None,
        company: None,
    }
}

#[test]
fn test_unconstrained_job_and_empty_candidate_score_100() {
    // Every factor awards full credit under the no-requirement rules
    let score = calculate_match_score_at(&empty_candidate(), &unconstrained_remote_job(), fixed_now());
    assert_eq!(score, 100);
}

#[test]
fn test_score_always_within_range() {
    let mut candidate = empty_candidate();
    candidate.skills = vec!["react".to_string(), "python".to_string()];
    candidate.location = "Lagos".to_string();

    let mut demanding = unconstrained_remote_job();
    demanding.required_skills = vec!["Rust".to_string(), "C++".to_string()];
    demanding.required_experience = 15.0;
    demanding.location_type = LocationType::OnSite;
    demanding.city = "Oslo".to_string();
    demanding.required_education = Some("PhD".to_string());

    for job in [unconstrained_remote_job(), demanding] {
        let score = calculate_match_score_at(&candidate, &job, fixed_now());
        assert!(score <= 100, "Score {} out of range", score);
    }
}

#[test]
fn test_case_insensitive_partial_skill_match() {
    let mut candidate = empty_candidate();
    candidate.skills = vec!["react".to_string(), "python".to_string()];

    let mut job = unconstrained_remote_job();
    job.required_skills = vec!["React".to_string(), "Node.js".to_string()];

    // Skills: 40 * 1/2 = 20; the other three factors award in full (30+15+15)
    let score = calculate_match_score_at(&candidate, &job, fixed_now());
    assert_eq!(score, 80);
}

#[test]
fn test_experience_fractional_credit_in_final_score() {
    let now = fixed_now();
    let start = now - Duration::seconds((2.5 * 365.25 * 86_400.0) as i64);

    let mut candidate = empty_candidate();
    candidate.experience = vec![work_entry(&start.to_rfc3339(), None, true)];

    let mut job = unconstrained_remote_job();
    job.required_experience = 5.0;

    // Experience: 30 * (2.5 / 5) = 15; the other three factors award in full
    let score = calculate_match_score_at(&candidate, &job, now);
    assert_eq!(score, 85);
}

#[test]
fn test_malformed_dates_do_not_panic() {
    let mut candidate = empty_candidate();
    candidate.experience = vec![
        work_entry("31-12-2019", Some("2021-01-01"), false),
        work_entry("", None, true),
        work_entry("2020-01-01", Some("never"), false),
    ];

    let mut job = unconstrained_remote_job();
    job.required_experience = 4.0;

    let score = calculate_match_score_at(&candidate, &job, fixed_now());
    // All entries degrade to zero years: 40 + 0 + 15 + 15
    assert_eq!(score, 70);
    assert_eq!(total_experience_years_at(&candidate.experience, fixed_now()), 0.0);
}

#[test]
fn test_education_requirement_unmet_loses_factor() {
    let mut candidate = empty_candidate();
    candidate.education = vec![EducationEntry {
        degree: "High School Diploma".to_string(),
        institution: None,
        field_of_study: None,
    }];

    let mut job = unconstrained_remote_job();
    job.required_education = Some("Bachelor of Engineering".to_string());

    // 40 + 30 + 15 + 0
    let score = calculate_match_score_at(&candidate, &job, fixed_now());
    assert_eq!(score, 85);
}

#[test]
fn test_onsite_job_with_matching_city() {
    let mut candidate = empty_candidate();
    candidate.location = "Hamburg, Germany".to_string();

    let mut job = unconstrained_remote_job();
    job.location_type = LocationType::OnSite;
    job.city = "Hamburg".to_string();
    job.location = "Hamburg office".to_string();

    let score = calculate_match_score_at(&candidate, &job, fixed_now());
    assert_eq!(score, 100);
}

#[test]
fn test_onsite_job_with_mismatched_city() {
    let mut candidate = empty_candidate();
    candidate.location = "Madrid".to_string();

    let mut job = unconstrained_remote_job();
    job.location_type = LocationType::OnSite;
    job.city = "Lisbon".to_string();
    job.location = "Lisbon office".to_string();

    // 40 + 30 + 0 + 15
    let score = calculate_match_score_at(&candidate, &job, fixed_now());
    assert_eq!(score, 85);
}

#[test]
fn test_category_boundaries() {
    assert_eq!(match_category(85).label, "Excellent Match");
    assert_eq!(match_category(79).label, "Good Match");
    assert_eq!(match_category(40).label, "Fair Match");
    assert_eq!(match_category(39).label, "Low Match");
}

#[test]
fn test_scoring_is_deterministic() {
    let mut candidate = empty_candidate();
    candidate.skills = vec!["Terraform".to_string(), "AWS".to_string()];
    candidate.location = "Austin".to_string();
    candidate.experience = vec![work_entry("2019-03-01", Some("2023-03-01"), false)];

    let mut job = unconstrained_remote_job();
    job.required_skills = vec!["aws".to_string(), "terraform".to_string(), "go".to_string()];
    job.required_experience = 3.0;

    let now = fixed_now();
    assert_eq!(
        calculate_match_score_at(&candidate, &job, now),
        calculate_match_score_at(&candidate, &job, now)
    );
}

#[test]
fn test_wall_clock_entry_point_in_range() {
    let mut candidate = empty_candidate();
    candidate.experience = vec![work_entry("2020-01-01", None, true)];

    let mut job = unconstrained_remote_job();
    job.required_experience = 2.0;

    let score = calculate_match_score(&candidate, &job);
    assert!(score <= 100);
}
