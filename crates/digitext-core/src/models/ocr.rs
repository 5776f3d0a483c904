use serde::{Deserialize, Serialize};

/// Confidence at or above this is labeled "High".
pub const HIGH_CONFIDENCE: f64 = 0.8;

/// Confidence at or above this (and below high) is labeled "Medium".
/// Words below it are flagged as low-confidence diagnostics.
pub const MEDIUM_CONFIDENCE: f64 = 0.6;

/// One recognized word with its position: `bbox` is `[x, y, width, height]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundingBox {
    pub text: String,
    pub confidence: f64,
    pub bbox: Vec<i64>,
}

/// Extracted text for one input file. Immutable once produced by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrResult {
    pub filename: String,
    pub text: String,
    pub confidence: f64,
    pub language: String,
    #[serde(default)]
    pub bbox_data: Vec<BoundingBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i64>,
}

impl OcrResult {
    /// Words whose per-word confidence falls below the medium threshold.
    pub fn low_confidence_words(&self) -> impl Iterator<Item = &BoundingBox> {
        self.bbox_data
            .iter()
            .filter(|word| word.confidence < MEDIUM_CONFIDENCE)
    }

    /// High / Medium / Low label for the file-level confidence.
    pub fn confidence_label(&self) -> &'static str {
        confidence_label(self.confidence)
    }
}

/// High / Medium / Low at the 0.8 / 0.6 cut points.
pub fn confidence_label(confidence: f64) -> &'static str {
    if confidence >= HIGH_CONFIDENCE {
        "High"
    } else if confidence >= MEDIUM_CONFIDENCE {
        "Medium"
    } else {
        "Low"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, confidence: f64) -> BoundingBox {
        BoundingBox {
            text: text.to_string(),
            confidence,
            bbox: vec![0, 0, 10, 10],
        }
    }

    #[test]
    fn confidence_labels_at_cut_points() {
        assert_eq!(confidence_label(0.95), "High");
        assert_eq!(confidence_label(0.8), "High");
        assert_eq!(confidence_label(0.79), "Medium");
        assert_eq!(confidence_label(0.6), "Medium");
        assert_eq!(confidence_label(0.59), "Low");
    }

    #[test]
    fn low_confidence_words_filters_below_medium() {
        let result = OcrResult {
            filename: "scan.png".to_string(),
            text: "hello blurry world".to_string(),
            confidence: 0.85,
            language: "eng".to_string(),
            bbox_data: vec![word("hello", 0.9), word("blurry", 0.4), word("world", 0.7)],
            page_number: None,
        };
        let low: Vec<_> = result.low_confidence_words().collect();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].text, "blurry");
    }
}
