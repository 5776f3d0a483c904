//! Shared helpers for the Digitext CLI binary.

use std::path::{Path, PathBuf};

use digitext_core::OcrResult;

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Output file name for a result's extracted text: the source name with its
/// extension replaced by `_extracted.txt`.
pub fn text_output_name(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    format!("{}_extracted.txt", stem)
}

/// Render one OCR result as the human-readable block printed by `submit`.
pub fn render_result(result: &OcrResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("── {} ──\n", result.filename));
    out.push_str(&format!("language:   {}\n", result.language));
    out.push_str(&format!(
        "confidence: {} ({:.1}%)\n",
        result.confidence_label(),
        result.confidence * 100.0
    ));
    if let Some(page) = result.page_number {
        out.push_str(&format!("page:       {}\n", page));
    }
    let low_count = result.low_confidence_words().count();
    if low_count > 0 {
        out.push_str(&format!("low-confidence words: {}\n", low_count));
    }
    out.push('\n');
    out.push_str(result.text.trim_end());
    out.push('\n');
    out
}

/// Write each result's extracted text into `dir`, one file per result.
/// Returns the written paths.
pub fn write_text_outputs(results: &[OcrResult], dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(results.len());
    for result in results {
        let path = dir.join(text_output_name(&result.filename));
        std::fs::write(&path, &result.text)?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use digitext_core::BoundingBox;

    fn sample_result() -> OcrResult {
        OcrResult {
            filename: "invoice.scan.png".to_string(),
            text: "Total: 42.00\n".to_string(),
            confidence: 0.73,
            language: "eng".to_string(),
            bbox_data: vec![BoundingBox {
                text: "42.OO".to_string(),
                confidence: 0.41,
                bbox: vec![10, 20, 30, 12],
            }],
            page_number: Some(1),
        }
    }

    #[test]
    fn text_output_name_replaces_only_the_last_extension() {
        assert_eq!(text_output_name("scan.png"), "scan_extracted.txt");
        assert_eq!(
            text_output_name("invoice.scan.png"),
            "invoice.scan_extracted.txt"
        );
        assert_eq!(text_output_name("no_extension"), "no_extension_extracted.txt");
    }

    #[test]
    fn render_result_includes_label_and_diagnostics() {
        let rendered = render_result(&sample_result());
        assert!(rendered.contains("invoice.scan.png"));
        assert!(rendered.contains("Medium (73.0%)"));
        assert!(rendered.contains("page:       1"));
        assert!(rendered.contains("low-confidence words: 1"));
        assert!(rendered.contains("Total: 42.00"));
    }

    #[test]
    fn write_text_outputs_creates_one_file_per_result() {
        let dir = tempfile::tempdir().unwrap();
        let results = vec![sample_result()];
        let written = write_text_outputs(&results, dir.path()).unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].ends_with("invoice.scan_extracted.txt"));
        assert_eq!(
            std::fs::read_to_string(&written[0]).unwrap(),
            "Total: 42.00\n"
        );
    }
}
