//! gigmatch: matching, safety screening and résumé retrieval for a
//! local-jobs marketplace.

pub mod config;
pub mod errors;
pub mod llm_client;
pub mod loader;
pub mod matching;
pub mod models;
pub mod rag;
pub mod safety;
pub mod state;
pub mod text;
