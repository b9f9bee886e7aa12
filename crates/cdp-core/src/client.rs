use serde::{Deserialize, Serialize};

/// Credit risk tier for a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Normalize free-text risk input to a tier.
    ///
    /// Accepts English and Spanish spellings, case-insensitive.
    /// Unrecognized input defaults to `Medium`.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "low" | "bajo" => RiskTier::Low,
            "high" | "alto" => RiskTier::High,
            // "medium"/"medio"/"med" and everything else
            _ => RiskTier::Medium,
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTier::Low => write!(f, "low"),
            RiskTier::Medium => write!(f, "medium"),
            RiskTier::High => write!(f, "high"),
        }
    }
}

/// Social network a client is most active on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    Instagram,
    Facebook,
    Linkedin,
    Twitter,
}

impl SocialNetwork {
    /// Normalize free-text network input, case-insensitive.
    ///
    /// Unrecognized input defaults to `Instagram`.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "facebook" => SocialNetwork::Facebook,
            "linkedin" => SocialNetwork::Linkedin,
            "twitter" => SocialNetwork::Twitter,
            _ => SocialNetwork::Instagram,
        }
    }
}

impl std::fmt::Display for SocialNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SocialNetwork::Instagram => write!(f, "instagram"),
            SocialNetwork::Facebook => write!(f, "facebook"),
            SocialNetwork::Linkedin => write!(f, "linkedin"),
            SocialNetwork::Twitter => write!(f, "twitter"),
        }
    }
}

/// A validated client record, immutable once produced by ingestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
    /// Free text, stored lowercase.
    pub sector: String,
    pub avg_spend: f64,
    pub risk: RiskTier,
    pub network: SocialNetwork,
}
