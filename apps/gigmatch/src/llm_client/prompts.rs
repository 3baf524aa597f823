// Shared prompt fragments. Each module that calls the generator keeps its own
// prompts.rs alongside it and reuses these where it needs them.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt for short, plain-text answers shown directly to users.
pub const PLAIN_TEXT_SYSTEM: &str = "You are a helpful assistant for a local jobs marketplace. \
    Answer in plain text only, without markdown, quotes or preamble.";

/// Fills `{name}` placeholders in one pass. Inserted values are never rescanned,
/// so user text containing `{...}` stays literal. Unknown placeholders and
/// other braces (JSON examples in templates) are left as written.
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_known_placeholders() {
        let out = render_template("Hi {name}, you are {age}.", &[("name", "Ravi"), ("age", "30")]);
        assert_eq!(out, "Hi Ravi, you are 30.");
    }

    #[test]
    fn test_render_keeps_json_braces_and_unknown_names() {
        let out = render_template(r#"[{"index": <n>}] {missing} {q}"#, &[("q", "x")]);
        assert_eq!(out, r#"[{"index": <n>}] {missing} x"#);
    }

    #[test]
    fn test_render_does_not_expand_inserted_values() {
        let out = render_template("{a} / {b}", &[("a", "{b}"), ("b", "second")]);
        assert_eq!(out, "{b} / second");
    }

    #[test]
    fn test_render_unclosed_brace() {
        assert_eq!(render_template("tail {open", &[("open", "x")]), "tail {open");
    }
}
