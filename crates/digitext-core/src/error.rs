//! Error types module
//!
//! This module provides the error taxonomy for the OCR client. Validation
//! errors are local and recoverable by correcting the selection; everything
//! else propagates to the caller as a single terminal failure carrying a
//! human-readable message.

/// Generic message shown when the server reports a failed job without detail.
pub const GENERIC_JOB_FAILURE: &str = "OCR processing failed";

/// Generic message shown when the attempt budget is exhausted.
const GENERIC_TIMEOUT: &str = "The OCR job timed out. Please try submitting again.";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// File rejected before submission. Never reaches the network layer.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Network or non-success HTTP failure on a single request. Carries the
    /// server-provided message when one was available.
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Attempt budget exhausted by repeated transport failures without ever
    /// observing a real status.
    #[error("Polling timed out after {attempts} failed attempts")]
    PollingTimeout { attempts: u32 },

    /// Attempt budget exhausted with the job still non-terminal.
    #[error("Job still not finished after {attempts} polls")]
    JobTimeout { attempts: u32 },

    /// Server reported a terminal `failed` status for the job.
    #[error("Job failed: {message}")]
    JobFailed { message: String },

    /// Local file could not be read before upload.
    #[error("Failed to read file: {0}")]
    FileRead(String),
}

impl ClientError {
    /// Build a `JobFailed` from an optional server `error_message`, falling
    /// back to the generic message.
    pub fn job_failed(error_message: Option<String>) -> Self {
        ClientError::JobFailed {
            message: error_message.unwrap_or_else(|| GENERIC_JOB_FAILURE.to_string()),
        }
    }

    /// Whether resubmission without changing the input can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ClientError::Transport { .. }
                | ClientError::PollingTimeout { .. }
                | ClientError::JobTimeout { .. }
        )
    }

    /// The one-line message the presentation layer shows to the user.
    /// Timeouts collapse to a generic timeout message; the job identifier is
    /// abandoned either way.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::PollingTimeout { .. } | ClientError::JobTimeout { .. } => {
                GENERIC_TIMEOUT.to_string()
            }
            ClientError::Validation(msg)
            | ClientError::Transport { message: msg }
            | ClientError::JobFailed { message: msg } => msg.clone(),
            ClientError::FileRead(msg) => format!("Failed to read file: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_failed_falls_back_to_generic_message() {
        let err = ClientError::job_failed(None);
        assert_eq!(err.user_message(), GENERIC_JOB_FAILURE);

        let err = ClientError::job_failed(Some("tesseract crashed".to_string()));
        assert_eq!(err.user_message(), "tesseract crashed");
    }

    #[test]
    fn timeouts_share_a_generic_user_message() {
        let polling = ClientError::PollingTimeout { attempts: 60 };
        let job = ClientError::JobTimeout { attempts: 60 };
        assert_eq!(polling.user_message(), job.user_message());
        // The Display impls stay distinct for logs.
        assert_ne!(polling.to_string(), job.to_string());
    }

    #[test]
    fn validation_is_not_retryable() {
        assert!(!ClientError::Validation("bad file".into()).is_retryable());
        assert!(ClientError::Transport {
            message: "connection refused".into()
        }
        .is_retryable());
    }
}
