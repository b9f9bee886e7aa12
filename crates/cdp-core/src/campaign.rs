use serde::{Deserialize, Serialize};

use crate::client::SocialNetwork;

/// Fixed campaign template identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    PremiumGrowth,
    ValueFocused,
    RiskMitigation,
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateId::PremiumGrowth => write!(f, "premium-growth"),
            TemplateId::ValueFocused => write!(f, "value-focused"),
            TemplateId::RiskMitigation => write!(f, "risk-mitigation"),
        }
    }
}

impl TemplateId {
    /// Parse a template name as rendered by `Display`.
    ///
    /// Unknown input falls back to `ValueFocused`.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "premium-growth" => TemplateId::PremiumGrowth,
            "risk-mitigation" => TemplateId::RiskMitigation,
            _ => TemplateId::ValueFocused,
        }
    }
}

/// Suggested delivery medium for a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Instagram,
    Facebook,
    Linkedin,
    Twitter,
}

impl From<SocialNetwork> for Channel {
    fn from(network: SocialNetwork) -> Self {
        match network {
            SocialNetwork::Instagram => Channel::Instagram,
            SocialNetwork::Facebook => Channel::Facebook,
            SocialNetwork::Linkedin => Channel::Linkedin,
            SocialNetwork::Twitter => Channel::Twitter,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Email => write!(f, "email"),
            Channel::Instagram => write!(f, "instagram"),
            Channel::Facebook => write!(f, "facebook"),
            Channel::Linkedin => write!(f, "linkedin"),
            Channel::Twitter => write!(f, "twitter"),
        }
    }
}

/// A selected campaign: static template data plus a suggested channel.
///
/// The message contains the literal `{{name}}` placeholder until the
/// composer substitutes the client's display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub template: TemplateId,
    pub title: String,
    pub message: String,
    pub cta: String,
    pub theme_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_channel: Option<Channel>,
}

impl Campaign {
    /// Resolve the delivery channel, defaulting to the client's network.
    #[must_use]
    pub fn channel_or(&self, network: SocialNetwork) -> Channel {
        self.suggested_channel.unwrap_or_else(|| network.into())
    }
}
