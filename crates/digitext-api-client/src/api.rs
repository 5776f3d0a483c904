//! Domain methods for the OCR API client.
//!
//! Endpoint paths are the caller contract with the remote service:
//! upload, per-job result snapshots, health, supported formats, and job
//! cleanup.

use std::path::Path;

use digitext_core::{ClientError, HealthResponse, JobResponse, ResultResponse, SupportedFormats};

use crate::OcrClient;

/// One file ready for upload: name, declared MIME type, and content.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Read a local file, inferring the MIME type from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| ClientError::FileRead(format!("{}: {}", path.display(), e)))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let mime_type = mime_for_extension(&name).to_string();

        Ok(Self {
            name,
            mime_type,
            bytes,
        })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// MIME type for a file name's extension, defaulting to octet-stream.
pub fn mime_for_extension(name: &str) -> &'static str {
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

impl OcrClient {
    /// Submit a batch of files as one server-side job. All files go into a
    /// single multipart payload under the repeated `files` field. Returns
    /// the server-assigned job id. Mutates no local state.
    pub async fn upload_files(&self, files: Vec<UploadFile>) -> Result<JobResponse, ClientError> {
        if files.is_empty() {
            return Err(ClientError::Validation("No files provided".to_string()));
        }

        let count = files.len();
        let mut form = reqwest::multipart::Form::new();
        for file in files {
            let part = reqwest::multipart::Part::bytes(file.bytes)
                .file_name(file.name.clone())
                .mime_str(&file.mime_type)
                .map_err(|e| {
                    ClientError::Validation(format!(
                        "Invalid MIME type '{}' for {}: {}",
                        file.mime_type, file.name, e
                    ))
                })?;
            form = form.part("files", part);
        }

        tracing::info!(files = count, "Uploading batch for OCR");
        let response: JobResponse = self.post_multipart("/api/ocr/upload", form).await?;
        tracing::info!(job_id = %response.job_id, "Job accepted");
        Ok(response)
    }

    /// Fetch the current status snapshot for a job.
    pub async fn fetch_result(&self, job_id: &str) -> Result<ResultResponse, ClientError> {
        self.get_json(&format!("/api/ocr/result/{}", job_id)).await
    }

    /// One-shot health probe. Never fails: an unreachable or unhealthy
    /// endpoint yields a synthesized unhealthy record so the caller can
    /// always render a status line.
    pub async fn health(&self) -> HealthResponse {
        match self.get_json::<HealthResponse>("/api/health").await {
            Ok(health) => health,
            Err(err) => {
                tracing::warn!(error = %err, "Health probe failed");
                HealthResponse::unreachable(err.user_message())
            }
        }
    }

    /// Supported formats advertised by the server (informational).
    pub async fn supported_formats(&self) -> Result<SupportedFormats, ClientError> {
        self.get_json("/api/supported-formats").await
    }

    /// Delete a finished or abandoned job on the server.
    pub async fn delete_job(&self, job_id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/api/ocr/job/{}", job_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_inference_covers_supported_types() {
        assert_eq!(mime_for_extension("scan.png"), "image/png");
        assert_eq!(mime_for_extension("photo.JPG"), "image/jpeg");
        assert_eq!(mime_for_extension("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_for_extension("img.webp"), "image/webp");
        assert_eq!(mime_for_extension("doc.pdf"), "application/pdf");
        assert_eq!(mime_for_extension("notes.txt"), "application/octet-stream");
        assert_eq!(mime_for_extension("no_extension"), "application/octet-stream");
    }
}
