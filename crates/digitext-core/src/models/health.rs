use serde::{Deserialize, Serialize};

const HEALTHY: &str = "healthy";
const UNHEALTHY: &str = "unhealthy";

/// Response of `GET /api/health`. When the endpoint is unreachable the
/// client synthesizes an unhealthy record instead of failing, so the UI can
/// always render a status line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tesseract_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    /// Degraded-but-valid record carrying the probe failure message.
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self {
            status: UNHEALTHY.to_string(),
            version: None,
            tesseract_version: None,
            error: Some(message.into()),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HEALTHY
    }
}

/// Response of `GET /api/supported-formats` (informational).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportedFormats {
    pub supported_extensions: Vec<String>,
    pub supported_mime_types: Vec<String>,
    pub max_file_size_mb: u64,
    pub max_batch_size: usize,
}
