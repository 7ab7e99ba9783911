use chrono::{DateTime, NaiveDate, Utc};

use crate::models::WorkExperience;

/// Seconds in a 365.25-day year, the leap-year-averaged conversion used
/// throughout the portal.
const SECONDS_PER_YEAR: f64 = 365.25 * 86_400.0;

/// Total years of experience across all work-history entries.
///
/// Overlapping employment periods are summed without de-duplication; a
/// candidate holding two concurrent jobs accrues years twice. The portal
/// depends on this behavior, so it is intentional.
pub fn total_experience_years(experience: &[WorkExperience]) -> f64 {
    total_experience_years_at(experience, Utc::now())
}

/// Same as [`total_experience_years`] but with an explicit clock, so callers
/// (and tests) can pin "now".
pub fn total_experience_years_at(experience: &[WorkExperience], now: DateTime<Utc>) -> f64 {
    experience.iter().map(|entry| entry_years(entry, now)).sum()
}

/// Elapsed years for a single entry, zero when the dates do not parse or the
/// entry ends before it starts.
fn entry_years(entry: &WorkExperience, now: DateTime<Utc>) -> f64 {
    let start = match parse_date(&entry.start_date) {
        Some(start) => start,
        None => return 0.0,
    };

    let end = if entry.current {
        now
    } else {
        match &entry.end_date {
            Some(raw) => match parse_date(raw) {
                Some(end) => end,
                None => return 0.0,
            },
            // Open-ended entries without the current flag still count to now
            None => now,
        }
    };

    let elapsed = (end - start).num_seconds();
    if elapsed <= 0 {
        return 0.0;
    }

    elapsed as f64 / SECONDS_PER_YEAR
}

/// Parse a stored date string: RFC 3339 first, then a plain `YYYY-MM-DD`.
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
