// Prompt templates for résumé re-ranking and natural-language query parsing.

/// Re-ranking prompt. Replace `{query}`, `{skills}`, `{min_experience}` and
/// `{candidates}` before sending.
pub const RERANK_PROMPT_TEMPLATE: &str = r#"An employer is searching for workers.

SEARCH: {query}
REQUIRED SKILLS: {skills}
MINIMUM EXPERIENCE (years): {min_experience}

CANDIDATES:
{candidates}

Rate how well each candidate fits the search. Return a JSON array, best first:
[{"index": <candidate number from the list above>, "relevance": <0-100>, "reason": "<one short sentence>"}]
Only include candidates that are at least somewhat relevant."#;

/// Query parsing prompt. Replace `{query}` before sending.
pub const QUERY_PARSE_PROMPT_TEMPLATE: &str = r#"Turn this employer search into structured filters.

SEARCH: {query}

Return a JSON object exactly like:
{"text": "<keywords describing the role>", "skills": ["<skill>"], "minExperience": <whole years or null>}"#;
