//! In-memory résumé index with keyword scoring.
//!
//! No LLM involvement and no internal locking: the owner decides how the
//! store is shared. Documents keep their first insertion position even when
//! re-indexed, and that order breaks score ties.

use std::collections::HashSet;

use chrono::{DateTime, Datelike, Utc};
use indexmap::IndexMap;
use tracing::debug;

use crate::rag::document::{RagDocument, RagQuery, RagSearchResult};
use crate::rag::experience::estimate_total_years;
use crate::text::{loose_match_lower, query_terms, tokenize};

const SKILL_MATCH_POINTS: f64 = 5.0;
/// Per-term cap on token hits, so keyword stuffing cannot dominate.
const TERM_HIT_CAP: usize = 3;
const EXPERIENCE_HIT_POINTS: f64 = 3.0;
const PROJECT_HIT_POINTS: f64 = 2.0;
const EDUCATION_HIT_POINTS: f64 = 1.0;
const MIN_EXPERIENCE_PENALTY: f64 = 10.0;
const MIN_EXPERIENCE_BONUS: f64 = 2.0;

/// A stored document plus the fields derived from it at index time.
#[derive(Debug, Clone)]
pub struct IndexedDocument {
    pub doc: RagDocument,
    pub indexed_at: DateTime<Utc>,
    tokens: HashSet<String>,
    skills_lower: Vec<String>,
}

impl IndexedDocument {
    fn new(doc: RagDocument) -> Self {
        let tokens = tokenize(&doc.text);
        let skills_lower = doc.parsed.skills.iter().map(|s| s.to_lowercase()).collect();
        Self {
            doc,
            indexed_at: Utc::now(),
            tokens,
            skills_lower,
        }
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[derive(Debug, Default)]
pub struct RagStore {
    docs: IndexMap<String, IndexedDocument>,
}

impl RagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the document for `doc.worker_id`.
    pub fn index(&mut self, doc: RagDocument) {
        let worker_id = doc.worker_id.clone();
        let indexed = IndexedDocument::new(doc);
        debug!(
            "Indexed résumé for worker {} ({} tokens)",
            worker_id,
            indexed.token_count()
        );
        self.docs.insert(worker_id, indexed);
    }

    /// Indexes every document, returning how many were indexed.
    pub fn bulk_index<I>(&mut self, docs: I) -> usize
    where
        I: IntoIterator<Item = RagDocument>,
    {
        let mut count = 0;
        for doc in docs {
            self.index(doc);
            count += 1;
        }
        count
    }

    /// Removes the document for `worker_id`; no-op if absent.
    pub fn remove(&mut self, worker_id: &str) -> Option<RagDocument> {
        self.docs.shift_remove(worker_id).map(|d| d.doc)
    }

    pub fn clear(&mut self) {
        self.docs.clear();
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn get(&self, worker_id: &str) -> Option<&IndexedDocument> {
        self.docs.get(worker_id)
    }

    /// Keyword search, best first. Ties keep insertion order.
    ///
    /// A query with no terms of at least three letters, no skills and no
    /// positive `min_experience` matches nothing.
    pub fn search(&self, query: &RagQuery) -> Vec<RagSearchResult> {
        self.search_at(query, Utc::now().year())
    }

    pub(crate) fn search_at(&self, query: &RagQuery, current_year: i32) -> Vec<RagSearchResult> {
        let terms = query_terms(&query.text);
        let skills: Vec<String> = query
            .skills
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        let min_experience = query.min_experience.filter(|m| *m > 0);

        if terms.is_empty() && skills.is_empty() && min_experience.is_none() {
            return Vec::new();
        }

        let mut results: Vec<RagSearchResult> = self
            .docs
            .values()
            .filter_map(|entry| {
                score_document(entry, &terms, &skills, min_experience, current_year)
            })
            .collect();

        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(query.effective_limit());

        debug!(
            "Keyword search: {} terms, {} skills -> {} results",
            terms.len(),
            skills.len(),
            results.len()
        );
        results
    }
}

fn score_document(
    entry: &IndexedDocument,
    terms: &[String],
    skills: &[String],
    min_experience: Option<u32>,
    current_year: i32,
) -> Option<RagSearchResult> {
    let parsed = &entry.doc.parsed;
    let mut score = 0.0_f64;
    let mut matched_skills: Vec<String> = Vec::new();
    let mut matched_keywords: Vec<String> = Vec::new();

    for wanted in skills {
        let hit = entry
            .skills_lower
            .iter()
            .position(|have| loose_match_lower(have, wanted));
        if let Some(i) = hit {
            score += SKILL_MATCH_POINTS;
            let original = &parsed.skills[i];
            if !matched_skills.contains(original) {
                matched_skills.push(original.clone());
            }
        }
    }

    for term in terms {
        let hits = entry
            .tokens
            .iter()
            .filter(|token| loose_match_lower(token, term))
            .count();
        if hits > 0 {
            score += hits.min(TERM_HIT_CAP) as f64;
            matched_keywords.push(term.clone());
        }
    }

    for exp in &parsed.experience {
        let blob = format!("{} {} {}", exp.title, exp.company, exp.description).to_lowercase();
        score += EXPERIENCE_HIT_POINTS * count_terms_in(&blob, terms);
    }

    for project in &parsed.projects {
        let blob = format!(
            "{} {} {}",
            project.name,
            project.description,
            project.technologies.join(" ")
        )
        .to_lowercase();
        score += PROJECT_HIT_POINTS * count_terms_in(&blob, terms);
    }

    for edu in &parsed.education {
        let blob = format!("{} {}", edu.degree, edu.institution).to_lowercase();
        score += EDUCATION_HIT_POINTS * count_terms_in(&blob, terms);
    }

    if let Some(min_years) = min_experience {
        let years = estimate_total_years(&parsed.experience, current_year);
        if years < min_years {
            score = (score - MIN_EXPERIENCE_PENALTY).max(0.0);
        } else {
            score += MIN_EXPERIENCE_BONUS;
        }
    }

    let score = (score * 100.0).round() / 100.0;
    if score <= 0.0 {
        return None;
    }

    Some(RagSearchResult {
        worker_id: entry.doc.worker_id.clone(),
        worker_name: entry.doc.worker_name.clone(),
        phone: entry.doc.phone.clone(),
        score,
        matched_skills,
        matched_keywords,
        parsed: parsed.clone(),
        explanation: None,
    })
}

fn count_terms_in(blob: &str, terms: &[String]) -> f64 {
    terms.iter().filter(|t| blob.contains(t.as_str())).count() as f64
}
