use serde::{Deserialize, Serialize};

/// Value/risk category assigned to a client.
///
/// The segmenter only produces `HighValue`/`Standard`/`Basic`; `Risk`
/// exists for legacy data entering through [`SegmentCategory::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentCategory {
    HighValue,
    Standard,
    Basic,
    Risk,
}

impl SegmentCategory {
    /// Normalize a category name, accepting legacy aliases.
    ///
    /// Canonical names plus the legacy Spanish labels ("ALTO_VALOR",
    /// "PREMIUM", "ESTÁNDAR", "CRECIMIENTO", "RIESGO") are recognized,
    /// case-insensitive. Unknown input falls back to `Standard`, the
    /// selector's safe default.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "high-value" | "highvalue" | "alto_valor" | "alto valor" | "premium" => {
                SegmentCategory::HighValue
            }
            "basic" | "basico" | "básico" | "growth" | "crecimiento" => SegmentCategory::Basic,
            "risk" | "riesgo" => SegmentCategory::Risk,
            // "standard"/"estandar"/"estándar" and everything else
            _ => SegmentCategory::Standard,
        }
    }

    /// Demote one step under high risk. `Basic` and `Risk` are floors.
    #[must_use]
    pub fn demote(self) -> Self {
        match self {
            SegmentCategory::HighValue => SegmentCategory::Standard,
            SegmentCategory::Standard => SegmentCategory::Basic,
            other => other,
        }
    }
}

impl std::fmt::Display for SegmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentCategory::HighValue => write!(f, "high-value"),
            SegmentCategory::Standard => write!(f, "standard"),
            SegmentCategory::Basic => write!(f, "basic"),
            SegmentCategory::Risk => write!(f, "risk"),
        }
    }
}

/// Segmentation outcome: category plus a 0–100 score and the accumulated
/// human-readable rationale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub category: SegmentCategory,
    pub score: u8,
    pub rationale: String,
}
