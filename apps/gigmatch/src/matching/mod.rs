// Worker/job matching: deterministic scoring plus human-readable explanations.
// No network access here except through the optional TextGenerator in explain.

pub mod explain;
pub mod prompts;
pub mod scoring;

pub use explain::{explain_job_match, generate_match_explanation_with_ai};
pub use scoring::{
    calculate_match_score, rank_jobs_for_worker, score_breakdown, MatchBreakdown, RankedJob,
};
