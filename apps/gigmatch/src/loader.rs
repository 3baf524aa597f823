//! JSON loaders for the command-line shell.

use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::models::{Job, WorkerProfile};
use crate::rag::document::RagDocument;

/// Reads a JSON array of résumé documents. Documents without a `workerId` are rejected.
pub fn load_documents(path: &Path) -> Result<Vec<RagDocument>, AppError> {
    let docs: Vec<RagDocument> = read_json(path)?;
    if let Some(pos) = docs.iter().position(|d| d.worker_id.trim().is_empty()) {
        return Err(AppError::Validation(format!(
            "document {} in {} has no workerId",
            pos,
            path.display()
        )));
    }
    info!("Loaded {} résumé documents from {}", docs.len(), path.display());
    Ok(docs)
}

/// Reads a single worker profile from a JSON object.
pub fn load_worker(path: &Path) -> Result<WorkerProfile, AppError> {
    read_json(path)
}

/// Reads a JSON array of jobs.
pub fn load_jobs(path: &Path) -> Result<Vec<Job>, AppError> {
    read_json(path)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AppError::NotFound(path.display().to_string()),
        _ => AppError::Io(e),
    })?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_document_array() {
        let file = write_temp(
            r#"[
                {"workerId": "w1", "workerName": "Ravi", "text": "plumber",
                 "parsed": {"skills": ["Plumbing"]}, "phone": "9876543210"},
                {"workerId": "w2", "workerName": "Sita", "text": "cook"}
            ]"#,
        );
        let docs = load_documents(file.path()).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].parsed.skills, vec!["Plumbing"]);
        assert_eq!(docs[1].phone, None);
    }

    #[test]
    fn test_missing_worker_id_is_validation_error() {
        let file = write_temp(r#"[{"workerName": "Nobody", "text": "x"}]"#);
        let err = load_documents(file.path()).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_documents(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let file = write_temp("{not json");
        assert_eq!(load_jobs(file.path()).unwrap_err().code(), "JSON_ERROR");
    }

    #[test]
    fn test_loads_worker_and_jobs() {
        let worker = write_temp(r#"{"skills": ["Cooking"], "location": "Guntur"}"#);
        let jobs = write_temp(r#"[{"title": "Cook", "jobType": "full-time"}]"#);
        assert_eq!(load_worker(worker.path()).unwrap().location, "Guntur");
        assert_eq!(load_jobs(jobs.path()).unwrap()[0].title, "Cook");
    }
}
