//! Best-effort total-experience estimate from free-text durations.
//!
//! Heuristic only: "2019 - 2022", "3 years 6 months" and "2021 - Present"
//! are understood; anything else contributes nothing.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ExperienceEntry;

static YEAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("valid regex"));

static YEARS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*\+?\s*(?:years?|yrs?)\b").expect("valid regex")
});

static MONTHS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(?:months?|mos?)\b").expect("valid regex"));

const ONGOING_MARKERS: &[&str] = &["present", "current", "ongoing"];

/// Months of experience implied by one duration string.
pub fn estimate_duration_months(duration: &str, current_year: i32) -> f64 {
    let lower = duration.to_lowercase();
    let years: Vec<i32> = YEAR_REGEX
        .find_iter(&lower)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();

    if let [first, .., last] = years.as_slice() {
        return f64::from((last - first).abs()) * 12.0;
    }

    let explicit: f64 = YEARS_REGEX
        .captures_iter(&lower)
        .filter_map(|c| c[1].parse::<f64>().ok())
        .map(|y| y * 12.0)
        .sum::<f64>()
        + MONTHS_REGEX
            .captures_iter(&lower)
            .filter_map(|c| c[1].parse::<f64>().ok())
            .sum::<f64>();
    if explicit > 0.0 {
        return explicit;
    }

    if years.len() == 1 && ONGOING_MARKERS.iter().any(|m| lower.contains(m)) {
        return f64::from((current_year - years[0]).max(0)) * 12.0;
    }

    0.0
}

/// Total years across all entries, rounded to the nearest whole year.
pub fn estimate_total_years(entries: &[ExperienceEntry], current_year: i32) -> u32 {
    let months: f64 = entries
        .iter()
        .map(|e| estimate_duration_months(&e.duration, current_year))
        .sum();
    (months / 12.0).round() as u32
}
