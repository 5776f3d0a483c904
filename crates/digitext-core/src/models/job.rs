use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use super::ocr::OcrResult;

/// Job status as reported by the server. The server's vocabulary is not
/// guaranteed stable, so anything unrecognized maps to `Unknown`, which the
/// poller treats as non-terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    /// Terminal statuses end polling. Everything else, including `Unknown`,
    /// keeps the poll loop going until the attempt budget bounds it.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

impl Display for JobStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            JobStatus::Pending => write!(f, "pending"),
            JobStatus::Processing => write!(f, "processing"),
            JobStatus::Completed => write!(f, "completed"),
            JobStatus::Failed => write!(f, "failed"),
            JobStatus::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for JobStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(JobStatus::Pending),
            "processing" => Ok(JobStatus::Processing),
            "completed" => Ok(JobStatus::Completed),
            "failed" => Ok(JobStatus::Failed),
            other => Err(anyhow::anyhow!("Unrecognized job status: {}", other)),
        }
    }
}

/// Response of `POST /api/ocr/upload`: the server-assigned opaque job id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    pub job_id: String,
    pub status: JobStatus,
    pub files_count: usize,
}

/// One observation of a job's status, from `GET /api/ocr/result/{job_id}`.
/// Superseded by the next snapshot; `results` is populated only once the
/// job completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultResponse {
    pub job_id: String,
    pub status: JobStatus,
    #[serde(default)]
    pub results: Vec<OcrResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_roundtrips_known_vocabulary() {
        for s in ["pending", "processing", "completed", "failed"] {
            let status: JobStatus = s.parse().unwrap();
            assert_eq!(status.to_string(), s);
        }
    }

    #[test]
    fn unexpected_status_deserializes_to_unknown() {
        let snapshot: ResultResponse = serde_json::from_str(
            r#"{"job_id": "abc", "status": "queued_for_retry", "results": []}"#,
        )
        .unwrap();
        assert_eq!(snapshot.status, JobStatus::Unknown);
        assert!(!snapshot.status.is_terminal());
    }

    #[test]
    fn only_completed_and_failed_are_terminal() {
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
        assert!(!JobStatus::Pending.is_terminal());
        assert!(!JobStatus::Processing.is_terminal());
        assert!(!JobStatus::Unknown.is_terminal());
    }

    #[test]
    fn snapshot_tolerates_missing_results_field() {
        let snapshot: ResultResponse =
            serde_json::from_str(r#"{"job_id": "abc", "status": "pending"}"#).unwrap();
        assert!(snapshot.results.is_empty());
        assert!(snapshot.error_message.is_none());
    }
}
