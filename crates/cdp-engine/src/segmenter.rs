//! Deterministic client segmentation: additive point scoring with an
//! accumulated human-readable rationale.

use cdp_core::{ActivityFrequency, ClientRecord, RiskTier, Segment, SegmentCategory, SocialProfile};

/// Sectors that carry the high-value bonus, in English and Spanish.
const PRIORITY_SECTORS: &[&str] = &[
    "technology",
    "tecnologia",
    "tecnología",
    "finance",
    "finanzas",
    "energy",
    "energia",
    "energía",
];

const DEFAULT_RATIONALE: &str = "Standard segmentation applied.";

/// Score a client + profile pair into a segment.
///
/// Pure and deterministic: sector bonus, spend tier (setting the
/// tentative category), risk adjustment (high risk demotes one step),
/// then independent social-signal bonuses. The final score is clamped to
/// `[0, 100]`.
#[must_use]
pub fn segment_client(client: &ClientRecord, profile: &SocialProfile) -> Segment {
    let mut score: i32 = 0;
    let mut rationale = String::new();

    let sector = client.sector.to_lowercase();
    if PRIORITY_SECTORS.contains(&sector.as_str()) {
        score += 30;
        rationale.push_str("High-value sector. ");
    }

    // The spend tier sets the tentative category.
    let mut category = if client.avg_spend > 50_000.0 {
        score += 35;
        rationale.push_str("High average spend. ");
        SegmentCategory::HighValue
    } else if client.avg_spend > 25_000.0 {
        score += 20;
        rationale.push_str("Mid-to-high spend. ");
        SegmentCategory::Standard
    } else {
        score += 10;
        rationale.push_str("Basic spend level. ");
        SegmentCategory::Basic
    };

    match client.risk {
        RiskTier::High => {
            score -= 20;
            rationale.push_str("High credit risk. ");
            category = category.demote();
        }
        RiskTier::Medium => {
            // Medium risk costs points but never demotes the category.
            score -= 5;
            rationale.push_str("Medium risk. ");
        }
        RiskTier::Low => {
            score += 10;
            rationale.push_str("Low credit risk. ");
        }
    }

    if profile.engagement_rate > 0.10 {
        score += 15;
        rationale.push_str("High social engagement. ");
    } else if profile.engagement_rate > 0.05 {
        score += 8;
        rationale.push_str("Moderate engagement. ");
    }

    if profile.sentiment_score > 0.5 {
        score += 10;
        rationale.push_str("Positive social sentiment. ");
    } else if profile.sentiment_score < -0.3 {
        score -= 10;
        rationale.push_str("Negative sentiment detected. ");
    }

    if profile.followers > 50_000 {
        score += 5;
        rationale.push_str("Large audience. ");
    }

    if profile.activity == ActivityFrequency::High {
        score += 8;
        rationale.push_str("High activity frequency. ");
    }

    let rationale = rationale.trim().to_string();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = score.clamp(0, 100) as u8;

    Segment {
        category,
        score,
        rationale: if rationale.is_empty() {
            DEFAULT_RATIONALE.to_string()
        } else {
            rationale
        },
    }
}
