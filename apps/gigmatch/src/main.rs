use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gigmatch::config::Config;
use gigmatch::errors::AppError;
use gigmatch::loader::{load_documents, load_jobs, load_worker};
use gigmatch::matching::{generate_match_explanation_with_ai, rank_jobs_for_worker};
use gigmatch::rag::RagQuery;
use gigmatch::safety::{check_message_suspicion, screen_job_posting};
use gigmatch::state::AppState;

/// Exit code when a job posting is rejected by the fraud gate.
const EXIT_REJECTED: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "gigmatch", version, about = "Worker/job matching and résumé search")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Index résumé documents from a JSON file and search them.
    Search {
        /// JSON array of résumé documents.
        #[arg(long)]
        docs: PathBuf,
        #[arg(long)]
        limit: Option<usize>,
        /// Required skill; repeat for several.
        #[arg(long = "skill")]
        skills: Vec<String>,
        /// Minimum years of experience.
        #[arg(long)]
        min_experience: Option<u32>,
        /// Let the LLM turn the query into skills and an experience filter first.
        #[arg(long)]
        natural: bool,
        query: String,
    },
    /// Rank jobs for one worker, best first.
    Score {
        /// JSON worker profile.
        #[arg(long)]
        worker: PathBuf,
        /// JSON array of jobs.
        #[arg(long)]
        jobs: PathBuf,
        /// Ask the LLM for the explanation text.
        #[arg(long)]
        ai: bool,
    },
    /// Check a chat message for off-platform contact or payment requests.
    ScanMessage { message: String },
    /// Screen a job posting for fraud phrases.
    ScanJob {
        #[arg(long, default_value = "")]
        title: String,
        description: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // stdout carries JSON only
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting gigmatch v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config)?;

    match cli.command {
        Command::Search {
            docs,
            limit,
            skills,
            min_experience,
            natural,
            query,
        } => {
            state.index_documents(load_documents(&docs)?);

            let mut rag_query = if natural {
                state.ranker.parse_query(&query).await
            } else {
                RagQuery::text(query)
            };
            if !skills.is_empty() {
                rag_query.skills = skills;
            }
            if min_experience.is_some() {
                rag_query.min_experience = min_experience;
            }
            if limit.is_some() {
                rag_query.limit = limit;
            }

            let results = state.ranker.rag_search(&rag_query).await;
            print_json(&json!({ "query": rag_query, "results": results }))?;
        }
        Command::Score { worker, jobs, ai } => {
            let worker = load_worker(&worker)?;
            let jobs = load_jobs(&jobs)?;
            let mut ranked = rank_jobs_for_worker(&worker, &jobs);

            if ai {
                for entry in &mut ranked {
                    entry.explanation = generate_match_explanation_with_ai(
                        state.generator.as_deref(),
                        &worker,
                        &entry.job,
                        entry.score,
                    )
                    .await;
                }
            }
            print_json(&ranked)?;
        }
        Command::ScanMessage { message } => {
            print_json(&check_message_suspicion(&message))?;
        }
        Command::ScanJob { title, description } => {
            match screen_job_posting(&title, &description) {
                Ok(finding) => print_json(&finding)?,
                Err(e) => {
                    let err = AppError::from(e);
                    print_json(&json!({ "code": err.code(), "error": err.to_string() }))?;
                    return Ok(ExitCode::from(EXIT_REJECTED));
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_args_parse() {
        let cli = Cli::try_parse_from([
            "gigmatch",
            "search",
            "--docs",
            "docs.json",
            "--skill",
            "Plumbing",
            "--skill",
            "Welding",
            "--min-experience",
            "2",
            "plumber in Guntur",
        ])
        .unwrap();
        match cli.command {
            Command::Search {
                skills,
                min_experience,
                natural,
                query,
                limit,
                ..
            } => {
                assert_eq!(skills, vec!["Plumbing", "Welding"]);
                assert_eq!(min_experience, Some(2));
                assert!(!natural);
                assert_eq!(limit, None);
                assert_eq!(query, "plumber in Guntur");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_scan_job_title_defaults_to_empty() {
        let cli = Cli::try_parse_from(["gigmatch", "scan-job", "Pay the registration fee"]).unwrap();
        match cli.command {
            Command::ScanJob { title, description } => {
                assert!(title.is_empty());
                assert_eq!(description, "Pay the registration fee");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_score_requires_both_files() {
        assert!(Cli::try_parse_from(["gigmatch", "score", "--worker", "w.json"]).is_err());
    }
}
