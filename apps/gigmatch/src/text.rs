//! Text normalization shared by the matcher and the résumé index.

use std::collections::HashSet;

/// Minimum length of an indexed document token.
pub const MIN_TOKEN_LEN: usize = 2;
/// Minimum length of a query term; shorter words are too noisy to score.
pub const MIN_QUERY_TERM_LEN: usize = 3;

/// Lowercases `text` and splits it into alphanumeric runs of at least
/// `MIN_TOKEN_LEN` characters, deduplicated.
pub fn tokenize(text: &str) -> HashSet<String> {
    alnum_runs(&text.to_lowercase())
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// Query terms: lowercase alphanumeric runs of at least `MIN_QUERY_TERM_LEN`
/// characters, deduplicated, first occurrence order.
pub fn query_terms(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut seen = HashSet::new();
    alnum_runs(&lower)
        .filter(|t| t.chars().count() >= MIN_QUERY_TERM_LEN)
        .filter(|t| seen.insert(*t))
        .map(str::to_string)
        .collect()
}

fn alnum_runs(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
}

/// True when either string contains the other, ignoring case.
///
/// Deliberately loose: "JS" matches "JavaScript"-style variants, and a
/// one-letter skill like "C" matches "Cooking". Blank strings never match.
pub fn loose_match(a: &str, b: &str) -> bool {
    loose_match_lower(&a.to_lowercase(), &b.to_lowercase())
}

/// Same as `loose_match` for inputs already lowercased.
pub fn loose_match_lower(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}

/// The part of a "city, region" location before the first comma, trimmed and lowercased.
pub fn city_of(location: &str) -> String {
    location
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_dedups() {
        let tokens = tokenize("Python developer, PYTHON and SQL; a b");
        assert!(tokens.contains("python"));
        assert!(tokens.contains("developer"));
        assert!(tokens.contains("sql"));
        assert!(tokens.contains("and"));
        assert!(!tokens.contains("a"));
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_tokenize_keeps_digits() {
        let tokens = tokenize("Worked 2019-2022 on B2B apps");
        assert!(tokens.contains("2019"));
        assert!(tokens.contains("2022"));
        assert!(tokens.contains("b2b"));
    }

    #[test]
    fn test_query_terms_drop_short_words_and_keep_order() {
        let terms = query_terms("an expert Java dev in java");
        assert_eq!(terms, vec!["expert", "java", "dev"]);
    }

    #[test]
    fn test_query_terms_empty_text() {
        assert!(query_terms("").is_empty());
        assert!(query_terms("  a b ").is_empty());
    }

    #[test]
    fn test_loose_match_is_bidirectional() {
        assert!(loose_match("JavaScript", "java"));
        assert!(loose_match("react", "React Native"));
        assert!(!loose_match("Plumbing", "Painting"));
    }

    #[test]
    fn test_loose_match_short_skill_quirk() {
        // Single letters match any word containing them.
        assert!(loose_match("C", "Cooking"));
    }

    #[test]
    fn test_blank_strings_never_match() {
        assert!(!loose_match("", "Cooking"));
        assert!(!loose_match("Cooking", "  "));
    }

    #[test]
    fn test_city_of_splits_on_first_comma() {
        assert_eq!(city_of("Guntur, AP"), "guntur");
        assert_eq!(city_of("  Hyderabad "), "hyderabad");
        assert_eq!(city_of("A, B, C"), "a");
        assert_eq!(city_of(""), "");
    }
}
