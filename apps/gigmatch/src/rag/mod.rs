// Résumé retrieval: an in-memory keyword index plus an optional LLM re-ranking
// pass that always degrades to keyword order.

pub mod document;
pub mod experience;
pub mod prompts;
pub mod ranker;
pub mod store;

pub use document::{RagDocument, RagQuery, RagSearchResult, DEFAULT_LIMIT};
pub use ranker::{parse_rag_query, HybridRanker, RemoteUnavailable};
pub use store::{IndexedDocument, RagStore};
