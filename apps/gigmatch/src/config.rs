use anyhow::{Context, Result};

const DEFAULT_LLM_API_URL: &str = "https://api.anthropic.com/v1/messages";
const DEFAULT_LLM_MODEL: &str = "claude-sonnet-4-5";

/// Runtime configuration loaded from environment variables (and `.env` if present).
///
/// Nothing is required: without API keys the LLM-assisted paths are skipped and
/// every ranking falls back to keyword scoring.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm_api_keys: Vec<String>,
    pub llm_api_url: String,
    pub llm_model: String,
    pub llm_timeout_secs: u64,
    pub llm_max_retries: u32,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_api_keys: Vec::new(),
            llm_api_url: DEFAULT_LLM_API_URL.to_string(),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_timeout_secs: 30,
            llm_max_retries: 3,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. `from_env` is the production
    /// entry point; tests pass a map-backed closure.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let llm_api_keys = lookup("LLM_API_KEYS")
            .or_else(|| lookup("ANTHROPIC_API_KEY"))
            .map(|raw| parse_key_list(&raw))
            .unwrap_or_default();

        Ok(Config {
            llm_api_keys,
            llm_api_url: lookup("LLM_API_URL").unwrap_or(defaults.llm_api_url),
            llm_model: lookup("LLM_MODEL").unwrap_or(defaults.llm_model),
            llm_timeout_secs: match lookup("LLM_TIMEOUT_SECS") {
                Some(v) => v
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
                None => defaults.llm_timeout_secs,
            },
            llm_max_retries: match lookup("LLM_MAX_RETRIES") {
                Some(v) => v
                    .parse::<u32>()
                    .context("LLM_MAX_RETRIES must be a non-negative integer")?,
                None => defaults.llm_max_retries,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }

    pub fn has_llm_credentials(&self) -> bool {
        !self.llm_api_keys.is_empty()
    }
}

fn parse_key_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
