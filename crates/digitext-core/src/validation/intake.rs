//! File intake validation
//!
//! Partitions a user-selected set of files into accepted and rejected before
//! any network call is made. Acceptance and rejection are independent per
//! file: rejected files do not block submission of the accepted subset.
//! The partition is pure and deterministic, so it can be re-run identically
//! on every selection event.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::config::{ClientConfig, ALLOWED_EXTENSIONS, ALLOWED_MIME_TYPES};

/// A user-selected file, as seen before submission. Ephemeral: created on
/// selection, discarded after submission or rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// Lowercased extension of the file name, if any.
    fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }
}

/// Why a file was rejected. `Display` produces the human-readable per-file
/// reason shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    UnsupportedType { detected: String },
    TooLarge { size: u64, limit: u64 },
    BatchLimitExceeded { limit: usize },
}

impl Display for RejectReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            RejectReason::UnsupportedType { detected } => write!(
                f,
                "unsupported file type '{}' (supported: PNG, JPG, JPEG, WEBP, PDF)",
                detected
            ),
            RejectReason::TooLarge { size, limit } => write!(
                f,
                "file is {:.1} MB, larger than the {} MB limit",
                *size as f64 / (1024.0 * 1024.0),
                limit / (1024 * 1024)
            ),
            RejectReason::BatchLimitExceeded { limit } => {
                write!(f, "batch limit of {} files exceeded", limit)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedFile {
    pub candidate: FileCandidate,
    pub reason: RejectReason,
}

/// Result of intake validation: accepted files in selection order, plus one
/// reason per rejected file.
#[derive(Debug, Clone, Default)]
pub struct IntakePartition {
    pub accepted: Vec<FileCandidate>,
    pub rejected: Vec<RejectedFile>,
}

impl IntakePartition {
    /// Whether submission may proceed. Zero accepted files means no upload.
    pub fn is_submittable(&self) -> bool {
        !self.accepted.is_empty()
    }

    /// Human-readable `"{name}: {reason}"` lines for the rejected files.
    pub fn rejection_lines(&self) -> Vec<String> {
        self.rejected
            .iter()
            .map(|r| format!("{}: {}", r.candidate.name, r.reason))
            .collect()
    }
}

/// Partition candidates into accepted and rejected, preserving selection
/// order among the accepted files.
///
/// Rules, checked per file:
/// - extension or MIME type must be in the allowed set
/// - size must not exceed `config.max_file_size_bytes`
/// - at most `config.max_batch_size` files are accepted; later otherwise
///   valid files are rejected with a batch-limit reason
pub fn partition_candidates(
    candidates: Vec<FileCandidate>,
    config: &ClientConfig,
) -> IntakePartition {
    let mut partition = IntakePartition::default();

    for candidate in candidates {
        if let Some(reason) = rejection_for(&candidate, config) {
            partition.rejected.push(RejectedFile { candidate, reason });
        } else if partition.accepted.len() >= config.max_batch_size {
            partition.rejected.push(RejectedFile {
                candidate,
                reason: RejectReason::BatchLimitExceeded {
                    limit: config.max_batch_size,
                },
            });
        } else {
            partition.accepted.push(candidate);
        }
    }

    partition
}

fn rejection_for(candidate: &FileCandidate, config: &ClientConfig) -> Option<RejectReason> {
    let extension_ok = candidate
        .extension()
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false);
    let mime_ok = ALLOWED_MIME_TYPES.contains(&candidate.mime_type.to_ascii_lowercase().as_str());

    if !extension_ok && !mime_ok {
        let detected = candidate
            .extension()
            .unwrap_or_else(|| candidate.mime_type.clone());
        return Some(RejectReason::UnsupportedType { detected });
    }

    if candidate.size > config.max_file_size_bytes {
        return Some(RejectReason::TooLarge {
            size: candidate.size,
            limit: config.max_file_size_bytes,
        });
    }

    None
}
