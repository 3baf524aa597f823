use std::sync::{Arc, RwLock};

use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::{LlmClient, TextGenerator};
use crate::rag::{HybridRanker, RagDocument, RagStore};

/// Shared application state handed to every command.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Single shared résumé index. Writers take the write lock; searches take
    /// the read lock for the keyword pass only.
    pub store: Arc<RwLock<RagStore>>,
    /// `None` when no API key is configured; every LLM path then falls back.
    pub generator: Option<Arc<dyn TextGenerator>>,
    pub ranker: HybridRanker,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let generator: Option<Arc<dyn TextGenerator>> = if config.has_llm_credentials() {
            let client = LlmClient::new(&config)?;
            info!(
                "LLM client initialized (model: {}, {} key(s))",
                client.model(),
                config.llm_api_keys.len()
            );
            Some(Arc::new(client))
        } else {
            info!("No LLM API key configured; using keyword ranking and template explanations");
            None
        };
        Ok(Self::with_generator(config, generator))
    }

    /// Builds state around an explicit generator (or none).
    pub fn with_generator(config: Config, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        let store = Arc::new(RwLock::new(RagStore::new()));
        let ranker = HybridRanker::new(store.clone(), generator.clone());
        Self {
            config,
            store,
            generator,
            ranker,
        }
    }

    /// Indexes documents into the shared store, returning how many were stored.
    pub fn index_documents(&self, docs: Vec<RagDocument>) -> usize {
        let mut store = self
            .store
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let count = store.bulk_index(docs);
        info!("Indexed {count} documents ({} total)", store.len());
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rag::RagQuery;

    #[test]
    fn test_new_without_keys_has_no_generator() {
        let state = AppState::new(Config::default()).unwrap();
        assert!(state.generator.is_none());
        assert!(!state.ranker.has_generator());
    }

    #[test]
    fn test_new_with_keys_builds_client() {
        let config = Config {
            llm_api_keys: vec!["k1".to_string()],
            ..Config::default()
        };
        let state = AppState::new(config).unwrap();
        assert!(state.generator.is_some());
    }

    #[tokio::test]
    async fn test_ranker_sees_documents_indexed_through_state() {
        let state = AppState::with_generator(Config::default(), None);
        let indexed = state.index_documents(vec![RagDocument {
            worker_id: "w1".to_string(),
            worker_name: "Ravi".to_string(),
            text: "experienced plumber".to_string(),
            ..RagDocument::default()
        }]);
        assert_eq!(indexed, 1);

        let results = state.ranker.rag_search(&RagQuery::text("plumber")).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].worker_id, "w1");
    }
}
