//! Wire models for the OCR service API.

pub mod health;
pub mod job;
pub mod ocr;

pub use health::{HealthResponse, SupportedFormats};
pub use job::{JobResponse, JobStatus, ResultResponse};
pub use ocr::{BoundingBox, OcrResult};
