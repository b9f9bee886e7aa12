//! Campaign selection: fixed segment-to-template lookup.

use cdp_core::{Campaign, Channel, Segment, SegmentCategory, TemplateId};

/// Static template data: title, message (with `{{name}}` placeholder),
/// call to action, theme color.
struct TemplateData {
    title: &'static str,
    message: &'static str,
    cta: &'static str,
    theme_color: &'static str,
}

const fn template_data(template: TemplateId) -> TemplateData {
    match template {
        TemplateId::PremiumGrowth => TemplateData {
            title: "Premium Growth Solutions",
            message: "Designed exclusively for market leaders like {{name}}.",
            cta: "Request a Premium Demo",
            theme_color: "#1E40AF",
        },
        TemplateId::ValueFocused => TemplateData {
            title: "Real Value for Your Business",
            message: "Discover how {{name}} can streamline its operation.",
            cta: "Explore Options",
            theme_color: "#059669",
        },
        TemplateId::RiskMitigation => TemplateData {
            title: "Protect Your Operation",
            message: "Robust solutions for {{name}}, backed by guarantees.",
            cta: "Talk to a Specialist",
            theme_color: "#DC2626",
        },
    }
}

/// Map a segment to its campaign. Pure lookup, no hidden state.
#[must_use]
pub fn select_campaign(segment: &Segment) -> Campaign {
    let (template, channel) = match segment.category {
        SegmentCategory::HighValue => (TemplateId::PremiumGrowth, Channel::Linkedin),
        SegmentCategory::Standard | SegmentCategory::Basic => {
            (TemplateId::ValueFocused, Channel::Email)
        }
        SegmentCategory::Risk => (TemplateId::RiskMitigation, Channel::Email),
    };

    let data = template_data(template);
    Campaign {
        template,
        title: data.title.to_string(),
        message: data.message.to_string(),
        cta: data.cta.to_string(),
        theme_color: data.theme_color.to_string(),
        suggested_channel: Some(channel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(category: SegmentCategory) -> Segment {
        Segment {
            category,
            score: 50,
            rationale: "test".to_string(),
        }
    }

    #[test]
    fn high_value_maps_to_premium_growth_on_linkedin() {
        let campaign = select_campaign(&segment(SegmentCategory::HighValue));
        assert_eq!(campaign.template, TemplateId::PremiumGrowth);
        assert_eq!(campaign.suggested_channel, Some(Channel::Linkedin));
        assert_eq!(campaign.theme_color, "#1E40AF");
    }

    #[test]
    fn standard_and_basic_map_to_value_focused_email() {
        for category in [SegmentCategory::Standard, SegmentCategory::Basic] {
            let campaign = select_campaign(&segment(category));
            assert_eq!(campaign.template, TemplateId::ValueFocused);
            assert_eq!(campaign.suggested_channel, Some(Channel::Email));
            assert_eq!(campaign.theme_color, "#059669");
        }
    }

    #[test]
    fn risk_maps_to_risk_mitigation_email() {
        let campaign = select_campaign(&segment(SegmentCategory::Risk));
        assert_eq!(campaign.template, TemplateId::RiskMitigation);
        assert_eq!(campaign.suggested_channel, Some(Channel::Email));
        assert_eq!(campaign.theme_color, "#DC2626");
    }

    #[test]
    fn selection_is_pure() {
        let a = select_campaign(&segment(SegmentCategory::HighValue));
        let b = select_campaign(&segment(SegmentCategory::HighValue));
        assert_eq!(a.title, b.title);
        assert_eq!(a.message, b.message);
        assert_eq!(a.cta, b.cta);
        assert_eq!(a.theme_color, b.theme_color);
        assert_eq!(a.suggested_channel, b.suggested_channel);
    }

    #[test]
    fn messages_carry_the_name_placeholder() {
        for category in [
            SegmentCategory::HighValue,
            SegmentCategory::Standard,
            SegmentCategory::Basic,
            SegmentCategory::Risk,
        ] {
            let campaign = select_campaign(&segment(category));
            assert!(
                campaign.message.contains("{{name}}"),
                "template {} lost its placeholder",
                campaign.template
            );
        }
    }
}
