//! Digitext Core Library
//!
//! This crate provides the domain models, error types, configuration, intake
//! validation, and session state shared by the Digitext OCR client components.

pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod validation;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::ClientError;
pub use models::{
    BoundingBox, HealthResponse, JobResponse, JobStatus, OcrResult, ResultResponse,
    SupportedFormats,
};
pub use session::{Session, SessionEpoch};
pub use validation::{
    partition_candidates, FileCandidate, IntakePartition, RejectReason, RejectedFile,
};
