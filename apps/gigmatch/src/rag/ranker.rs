//! Hybrid ranking — keyword search first, optional LLM re-rank second.
//!
//! Fallback chain: index → keyword score → LLM re-rank → keyword order.
//! Every remote step is an `attempt_*` returning `Result<_, RemoteUnavailable>`
//! and every caller resolves it with a deterministic fallback, so
//! `rag_search` and `parse_rag_query` never fail.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::llm_client::prompts::{render_template, JSON_ONLY_SYSTEM};
use crate::llm_client::{generate_json, LlmError, TextGenerator};
use crate::rag::document::{RagQuery, RagSearchResult, DEFAULT_LIMIT};
use crate::rag::prompts::{QUERY_PARSE_PROMPT_TEMPLATE, RERANK_PROMPT_TEMPLATE};
use crate::rag::store::RagStore;

/// Keyword candidates fetched before re-ranking, regardless of the caller's limit.
pub const CANDIDATE_POOL: usize = 20;
/// Candidates summarized for the LLM.
pub const RERANK_WINDOW: usize = 10;
/// At or below this many candidates the LLM pass is skipped.
pub const RERANK_MIN_CANDIDATES: usize = 3;

const SUMMARY_MAX_SKILLS: usize = 8;
const SUMMARY_MAX_EXPERIENCE: usize = 2;
const SUMMARY_MAX_PROJECTS: usize = 2;

/// Why a remote step produced nothing usable. Always handled by a fallback.
#[derive(Debug, Error)]
pub enum RemoteUnavailable {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("re-ranker returned no entry with a valid index")]
    NoUsableRankings,
}

/// One re-rank entry. Decoded per element so a malformed entry is dropped on
/// its own; `index` is a number so `-1` or `2.0` reach the range check.
#[derive(Debug, Deserialize)]
struct Ranking {
    index: f64,
    relevance: f64,
    #[serde(default)]
    reason: String,
}

impl Ranking {
    /// The 0-based window position, if `index` is a whole number in `1..=window_len`.
    fn position(&self, window_len: usize) -> Option<usize> {
        let index = self.index;
        let whole = index.is_finite() && index.fract() == 0.0;
        (whole && index >= 1.0 && index <= window_len as f64).then(|| index as usize - 1)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ParsedQueryResponse {
    text: Option<String>,
    skills: Vec<String>,
    min_experience: Option<f64>,
}

/// Résumé search over a shared `RagStore`, optionally re-ranked by a `TextGenerator`.
///
/// The store lock is held only for the synchronous keyword pass, never across
/// the generator call.
#[derive(Clone)]
pub struct HybridRanker {
    store: Arc<RwLock<RagStore>>,
    generator: Option<Arc<dyn TextGenerator>>,
}

impl HybridRanker {
    pub fn new(store: Arc<RwLock<RagStore>>, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { store, generator }
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Returns up to `query.limit` (default 10) results, best first.
    pub async fn rag_search(&self, query: &RagQuery) -> Vec<RagSearchResult> {
        let limit = query.effective_limit();
        let mut candidates = self.keyword_candidates(query);

        if candidates.is_empty() {
            return candidates;
        }

        let generator = match self.generator.as_deref() {
            Some(g) if candidates.len() > RERANK_MIN_CANDIDATES => g,
            _ => {
                debug!(
                    "Skipping LLM re-rank ({} candidates, generator configured: {})",
                    candidates.len(),
                    self.has_generator()
                );
                candidates.truncate(limit);
                return candidates;
            }
        };

        match attempt_rerank(generator, query, &candidates).await {
            Ok(mut reranked) => {
                info!(
                    "LLM re-ranked {} of {} candidates",
                    reranked.len(),
                    candidates.len()
                );
                reranked.truncate(limit);
                reranked
            }
            Err(e) => {
                warn!("LLM re-rank unavailable, using keyword order: {e}");
                candidates.truncate(limit);
                candidates
            }
        }
    }

    /// Structured query from free text; see [`parse_rag_query`].
    pub async fn parse_query(&self, natural_query: &str) -> RagQuery {
        parse_rag_query(self.generator.as_deref(), natural_query).await
    }

    fn keyword_candidates(&self, query: &RagQuery) -> Vec<RagSearchResult> {
        let pool_query = RagQuery {
            limit: Some(CANDIDATE_POOL),
            ..query.clone()
        };
        let store = self.store.read().unwrap_or_else(PoisonError::into_inner);
        store.search(&pool_query)
    }
}

async fn attempt_rerank(
    generator: &dyn TextGenerator,
    query: &RagQuery,
    candidates: &[RagSearchResult],
) -> Result<Vec<RagSearchResult>, RemoteUnavailable> {
    let window = &candidates[..candidates.len().min(RERANK_WINDOW)];
    let prompt = build_rerank_prompt(query, window);
    let entries: Vec<serde_json::Value> =
        generate_json(generator, &prompt, JSON_ONLY_SYSTEM).await?;
    apply_rankings(window, entries)
}

/// Maps 1-based rankings back onto the candidate window. Entries that do not
/// decode, fall outside the window or repeat an earlier index are dropped.
fn apply_rankings(
    window: &[RagSearchResult],
    entries: Vec<serde_json::Value>,
) -> Result<Vec<RagSearchResult>, RemoteUnavailable> {
    let total = entries.len();
    let mut seen = HashSet::new();
    let mut reranked: Vec<RagSearchResult> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<Ranking>(entry).ok())
        .filter_map(|r| r.position(window.len()).map(|pos| (pos, r)))
        .filter(|(pos, _)| seen.insert(*pos))
        .map(|(pos, r)| RagSearchResult {
            score: r.relevance.clamp(0.0, 100.0),
            explanation: Some(r.reason),
            ..window[pos].clone()
        })
        .collect();

    if reranked.len() < total {
        debug!(
            "Dropped {} of {} re-rank entries (malformed, out of range or repeated)",
            total - reranked.len(),
            total
        );
    }

    if reranked.is_empty() {
        return Err(RemoteUnavailable::NoUsableRankings);
    }

    reranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(reranked)
}

fn build_rerank_prompt(query: &RagQuery, window: &[RagSearchResult]) -> String {
    let skills = if query.skills.is_empty() {
        "none specified".to_string()
    } else {
        query.skills.join(", ")
    };
    let min_experience = query
        .min_experience
        .map(|y| y.to_string())
        .unwrap_or_else(|| "none".to_string());

    let candidates = summarize_candidates(window);

    render_template(
        RERANK_PROMPT_TEMPLATE,
        &[
            ("query", query.text.as_str()),
            ("skills", skills.as_str()),
            ("min_experience", min_experience.as_str()),
            ("candidates", candidates.as_str()),
        ],
    )
}

/// One line per candidate: name, a few skills, recent roles, project names.
fn summarize_candidates(window: &[RagSearchResult]) -> String {
    window
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let parsed = &c.parsed;
            let skills: Vec<&str> = parsed
                .skills
                .iter()
                .take(SUMMARY_MAX_SKILLS)
                .map(String::as_str)
                .collect();
            let experience: Vec<String> = parsed
                .experience
                .iter()
                .take(SUMMARY_MAX_EXPERIENCE)
                .map(|e| {
                    let role = match (e.title.trim(), e.company.trim()) {
                        (t, "") => t.to_string(),
                        (t, c) => format!("{t} at {c}"),
                    };
                    if e.duration.trim().is_empty() {
                        role
                    } else {
                        format!("{role} ({})", e.duration.trim())
                    }
                })
                .collect();
            let projects: Vec<&str> = parsed
                .projects
                .iter()
                .take(SUMMARY_MAX_PROJECTS)
                .map(|p| p.name.as_str())
                .collect();

            format!(
                "{}. {} | Skills: {} | Experience: {} | Projects: {}",
                i + 1,
                c.worker_name,
                or_none(&skills.join(", ")),
                or_none(&experience.join("; ")),
                or_none(&projects.join(", "))
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn or_none(s: &str) -> &str {
    if s.is_empty() {
        "none"
    } else {
        s
    }
}

/// Turns a free-text employer search into a `RagQuery`.
///
/// Falls back to `{text: natural_query, limit: 10}` when no generator is
/// configured or its answer is unusable.
pub async fn parse_rag_query(
    generator: Option<&dyn TextGenerator>,
    natural_query: &str,
) -> RagQuery {
    let fallback = || RagQuery {
        text: natural_query.to_string(),
        limit: Some(DEFAULT_LIMIT),
        ..RagQuery::default()
    };

    let Some(generator) = generator else {
        return fallback();
    };

    match attempt_parse_query(generator, natural_query).await {
        Ok(query) => query,
        Err(e) => {
            warn!("LLM query parsing unavailable, searching raw text: {e}");
            fallback()
        }
    }
}

async fn attempt_parse_query(
    generator: &dyn TextGenerator,
    natural_query: &str,
) -> Result<RagQuery, RemoteUnavailable> {
    let prompt = render_template(QUERY_PARSE_PROMPT_TEMPLATE, &[("query", natural_query)]);
    let parsed: ParsedQueryResponse = generate_json(generator, &prompt, JSON_ONLY_SYSTEM).await?;

    let text = parsed
        .text
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| natural_query.to_string());
    let skills = parsed
        .skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    // Whole years, rounded down: 2.5 becomes 2.
    let min_experience = parsed
        .min_experience
        .map(f64::floor)
        .filter(|y| y.is_finite() && *y >= 1.0)
        .map(|y| y as u32);

    Ok(RagQuery {
        text,
        skills,
        min_experience,
        limit: Some(DEFAULT_LIMIT),
    })
}
