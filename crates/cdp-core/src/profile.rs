use serde::{Deserialize, Serialize};

/// Posting/interaction frequency derived from engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityFrequency {
    Low,
    Medium,
    High,
}

impl ActivityFrequency {
    /// Derive activity from a sampled engagement rate.
    ///
    /// High above 0.08, Low below 0.04, Medium in between.
    #[must_use]
    pub fn from_engagement(rate: f64) -> Self {
        if rate > 0.08 {
            ActivityFrequency::High
        } else if rate < 0.04 {
            ActivityFrequency::Low
        } else {
            ActivityFrequency::Medium
        }
    }
}

/// Synthesized social-media profile for one client.
///
/// Derived from the client's network plus randomness; one profile per
/// pipeline run, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialProfile {
    /// Fraction in `[0, 0.15]`.
    pub engagement_rate: f64,
    pub followers: u32,
    pub avg_likes: u32,
    /// Clamped to `[-1, 1]`.
    pub sentiment_score: f64,
    pub activity: ActivityFrequency,
}
