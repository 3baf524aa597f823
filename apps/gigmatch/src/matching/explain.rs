//! Match explanations — why a job was suggested to a worker.
//!
//! The deterministic explainer reads the same `MatchBreakdown` the scorer
//! produces, so a signal that earned points always yields a fragment.
//! The AI variant is display sugar that degrades to the deterministic text.

use tracing::{debug, warn};

use crate::llm_client::prompts::{render_template, PLAIN_TEXT_SYSTEM};
use crate::llm_client::{LlmError, TextGenerator};
use crate::matching::prompts::MATCH_EXPLANATION_PROMPT_TEMPLATE;
use crate::matching::scoring::{
    score_breakdown, MatchBreakdown, AVAILABILITY_FULL_POINTS, LOCATION_SAME_CITY_POINTS,
};
use crate::models::{Job, WorkerProfile};
use crate::text::city_of;

/// Builds a human-readable justification for a worker/job pairing.
///
/// `score` is the value the caller displays; the fragments are re-derived from
/// the inputs so the text never depends on a stale number.
pub fn explain_job_match(worker: &WorkerProfile, job: &Job, score: u8) -> String {
    let breakdown = score_breakdown(worker, job);
    if breakdown.total != score {
        debug!(
            "explain_job_match called with score {} but inputs score {}",
            score, breakdown.total
        );
    }
    explain_breakdown(worker, job, &breakdown)
}

pub(crate) fn explain_breakdown(
    worker: &WorkerProfile,
    job: &Job,
    breakdown: &MatchBreakdown,
) -> String {
    let reasons = reason_fragments(worker, job, breakdown);
    if reasons.is_empty() {
        return fallback_sentence(job);
    }
    format!("{}.", reasons.join(". "))
}

fn reason_fragments(worker: &WorkerProfile, job: &Job, breakdown: &MatchBreakdown) -> Vec<String> {
    let mut reasons = Vec::new();

    if !breakdown.matched_skills.is_empty() {
        reasons.push(format!(
            "Your skills match {} of {} required ({})",
            breakdown.matched_skills.len(),
            breakdown.required_skill_count,
            breakdown.matched_skills.join(", ")
        ));
    }

    if breakdown.category > 0 {
        reasons.push(format!("It is in your preferred category: {}", job.category));
    }

    if breakdown.location >= LOCATION_SAME_CITY_POINTS {
        reasons.push(format!("The job is in your city ({})", display_city(&job.location)));
    } else if breakdown.location > 0 {
        reasons.push(format!("The job is near you in {}", job.location.trim()));
    }

    if breakdown.availability >= AVAILABILITY_FULL_POINTS {
        reasons.push(format!(
            "Your {} availability fits this {} role",
            worker.availability.trim().to_lowercase(),
            job.job_type
        ));
    } else if breakdown.availability > 0 {
        reasons.push(format!(
            "Your availability partly fits this {} role",
            job.job_type
        ));
    }

    reasons
}

fn fallback_sentence(job: &Job) -> String {
    if job.category.trim().is_empty() {
        format!("This {} job may suit your profile.", job.job_type)
    } else {
        format!(
            "This {} {} job may suit your profile.",
            job.job_type,
            job.category.trim()
        )
    }
}

fn display_city(location: &str) -> String {
    location
        .split(',')
        .next()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| city_of(location))
}

/// Asks the generator for a one-sentence explanation, falling back to
/// `explain_job_match` when it is unavailable or answers with nothing.
pub async fn generate_match_explanation_with_ai(
    generator: Option<&dyn TextGenerator>,
    worker: &WorkerProfile,
    job: &Job,
    score: u8,
) -> String {
    let Some(generator) = generator else {
        return explain_job_match(worker, job, score);
    };

    match attempt_ai_explanation(generator, worker, job, score).await {
        Ok(text) => text,
        Err(e) => {
            warn!("AI match explanation unavailable, using deterministic text: {e}");
            explain_job_match(worker, job, score)
        }
    }
}

async fn attempt_ai_explanation(
    generator: &dyn TextGenerator,
    worker: &WorkerProfile,
    job: &Job,
    score: u8,
) -> Result<String, LlmError> {
    let prompt = build_explanation_prompt(worker, job, score);
    let raw = generator.generate(&prompt, PLAIN_TEXT_SYSTEM).await?;
    let cleaned = clean_generated_sentence(&raw);
    if cleaned.is_empty() {
        return Err(LlmError::EmptyContent);
    }
    Ok(cleaned)
}

fn build_explanation_prompt(worker: &WorkerProfile, job: &Job, score: u8) -> String {
    let score = score.to_string();
    let worker_skills = worker.skills.join(", ");
    let required_skills = job.required_skills.join(", ");
    let worker_categories = worker.categories.join(", ");

    render_template(
        MATCH_EXPLANATION_PROMPT_TEMPLATE,
        &[
            ("score", score.as_str()),
            ("worker_skills", worker_skills.as_str()),
            ("required_skills", required_skills.as_str()),
            ("worker_categories", worker_categories.as_str()),
            ("job_category", job.category.as_str()),
            ("worker_location", worker.location.as_str()),
            ("job_location", job.location.as_str()),
            ("availability", worker.availability.as_str()),
            ("job_type", job.job_type.as_str()),
        ],
    )
}

/// Trims whitespace and any wrapping quotes the model adds.
fn clean_generated_sentence(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| matches!(c, '"' | '\'' | '“' | '”' | '`'))
        .trim()
        .to_string()
}
