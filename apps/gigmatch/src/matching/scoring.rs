//! Match scoring — deterministic 0–100 compatibility between a worker and a job.
//!
//! Five independent, capped signals:
//! skills (40) + category (20) + location (15) + availability (15) + experience (10).
//! Pure functions: no I/O, no randomness, no caching.

use serde::{Deserialize, Serialize};

use crate::models::{Job, JobType, WorkerProfile};
use crate::text::{city_of, loose_match};

pub const SKILL_WEIGHT: f64 = 40.0;
pub const CATEGORY_POINTS: u8 = 20;
pub const LOCATION_SAME_CITY_POINTS: u8 = 15;
pub const LOCATION_NEARBY_POINTS: u8 = 10;
pub const AVAILABILITY_FULL_POINTS: u8 = 15;
pub const AVAILABILITY_PARTIAL_POINTS: u8 = 8;
pub const EXPERIENCE_POINTS: u8 = 10;
/// Experience text must be longer than this many characters to earn the bonus.
pub const EXPERIENCE_MIN_CHARS: usize = 20;

/// Per-signal contributions behind a match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skills: f64,
    pub category: u8,
    pub location: u8,
    pub availability: u8,
    pub experience: u8,
    /// Required skills the worker covers, in job order.
    pub matched_skills: Vec<String>,
    pub required_skill_count: usize,
    pub total: u8,
}

/// A job scored for one worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedJob {
    pub job: Job,
    pub score: u8,
    pub explanation: String,
}

/// Returns the 0–100 match score for `worker` against `job`.
pub fn calculate_match_score(worker: &WorkerProfile, job: &Job) -> u8 {
    score_breakdown(worker, job).total
}

/// Computes every sub-score and the clamped, rounded total.
pub fn score_breakdown(worker: &WorkerProfile, job: &Job) -> MatchBreakdown {
    let matched_skills = matched_required_skills(worker, job);
    let required_skill_count = job.required_skills.len();

    let skills = if required_skill_count == 0 {
        0.0
    } else {
        (matched_skills.len() as f64 / required_skill_count as f64) * SKILL_WEIGHT
    };

    let category = category_score(worker, job);
    let location = location_score(&worker.location, &job.location);
    let availability = availability_score(&worker.availability, job.job_type);
    let experience = experience_score(&worker.experience);

    let sum = skills
        + f64::from(category)
        + f64::from(location)
        + f64::from(availability)
        + f64::from(experience);
    let total = sum.clamp(0.0, 100.0).round() as u8;

    MatchBreakdown {
        skills,
        category,
        location,
        availability,
        experience,
        matched_skills,
        required_skill_count,
        total,
    }
}

/// Scores every job for one worker, best first. Equal scores keep input order.
pub fn rank_jobs_for_worker(worker: &WorkerProfile, jobs: &[Job]) -> Vec<RankedJob> {
    let mut ranked: Vec<RankedJob> = jobs
        .iter()
        .map(|job| {
            let breakdown = score_breakdown(worker, job);
            RankedJob {
                explanation: super::explain::explain_breakdown(worker, job, &breakdown),
                score: breakdown.total,
                job: job.clone(),
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

fn matched_required_skills(worker: &WorkerProfile, job: &Job) -> Vec<String> {
    job.required_skills
        .iter()
        .filter(|required| worker.skills.iter().any(|have| loose_match(have, required)))
        .cloned()
        .collect()
}

fn category_score(worker: &WorkerProfile, job: &Job) -> u8 {
    if !job.category.is_empty() && worker.categories.iter().any(|c| *c == job.category) {
        CATEGORY_POINTS
    } else {
        0
    }
}

pub(crate) fn location_score(worker_location: &str, job_location: &str) -> u8 {
    let worker_city = city_of(worker_location);
    let job_city = city_of(job_location);

    if !worker_city.is_empty() && worker_city == job_city {
        return LOCATION_SAME_CITY_POINTS;
    }

    let worker_full = worker_location.to_lowercase();
    let job_full = job_location.to_lowercase();
    let nearby = (!job_city.is_empty() && worker_full.contains(&job_city))
        || (!worker_city.is_empty() && job_full.contains(&worker_city));

    if nearby {
        LOCATION_NEARBY_POINTS
    } else {
        0
    }
}

pub(crate) fn availability_score(availability: &str, job_type: JobType) -> u8 {
    let a = availability.to_lowercase();

    let full_fit = (a.contains("full") && job_type == JobType::FullTime)
        || (a.contains("part") && job_type == JobType::PartTime)
        || a.contains("flexible")
        || a.contains("any");
    if full_fit {
        return AVAILABILITY_FULL_POINTS;
    }

    let partial_fit = (a.contains("part") && job_type == JobType::Gig)
        || (a.contains("full") && job_type == JobType::PartTime);
    if partial_fit {
        AVAILABILITY_PARTIAL_POINTS
    } else {
        0
    }
}

fn experience_score(experience: &str) -> u8 {
    if experience.chars().count() > EXPERIENCE_MIN_CHARS {
        EXPERIENCE_POINTS
    } else {
        0
    }
}
