use serde::{Deserialize, Serialize};

/// A single work-history entry on a candidate profile.
///
/// Dates are kept as strings because the host application stores them
/// loosely; parsing happens in the experience helper and fails soft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperience {
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate", default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

/// An education entry on a candidate profile.
///
/// Only `degree` participates in matching; the other fields are carried
/// through for the host application's benefit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(rename = "fieldOfStudy", default)]
    pub field_of_study: Option<String>,
}

/// Candidate profile as read from the portal's profile store.
///
/// Absent data is the empty collection or empty string, never a sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<WorkExperience>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
}

/// Where a position is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationType {
    #[serde(rename = "on-site")]
    OnSite,
    #[serde(rename = "remote")]
    Remote,
    #[serde(rename = "hybrid")]
    Hybrid,
}

/// Job posting as read from the portal's jobs store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "requiredSkills", default)]
    pub required_skills: Vec<String>,
    /// Required years of experience; 0 means no requirement.
    #[serde(rename = "requiredExperience", default)]
    pub required_experience: f64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub city: String,
    #[serde(rename = "locationType")]
    pub location_type: LocationType,
    #[serde(rename = "requiredEducation", default)]
    pub required_education: Option<String>,
}

/// A posting paired with its computed match score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredJob {
    pub job: JobPosting,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

/// Qualitative bucket for a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchCategory {
    pub label: &'static str,
    pub description: &'static str,
}
