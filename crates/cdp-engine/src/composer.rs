//! HTML composition: campaign plus client data into a self-contained
//! document. Pure string templating; the timestamp is passed in so the
//! output is reproducible under test.

use chrono::{DateTime, Utc};

use cdp_core::{Campaign, ClientRecord};

/// Placeholder token substituted with the client's display name.
pub const NAME_PLACEHOLDER: &str = "{{name}}";

/// Render the campaign for one client as a standalone HTML document.
///
/// The document embeds no external resources: inline styles only, theme
/// color applied to the header and the CTA button.
#[must_use]
pub fn compose_html(
    client: &ClientRecord,
    campaign: &Campaign,
    generated_at: DateTime<Utc>,
) -> String {
    let message = campaign.message.replace(NAME_PLACEHOLDER, &client.name);
    let color = &campaign.theme_color;

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Campaign for {name}</title>
  <style>
    * {{ margin: 0; padding: 0; box-sizing: border-box; }}
    body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; background: #f5f5f5; }}
    .container {{ max-width: 600px; margin: 40px auto; background: white; border-radius: 12px; overflow: hidden; box-shadow: 0 4px 6px rgba(0,0,0,0.1); }}
    .header {{ background: {color}; color: white; padding: 40px 20px; text-align: center; }}
    .header h1 {{ font-size: 28px; margin-bottom: 10px; }}
    .content {{ padding: 40px 20px; }}
    .content p {{ font-size: 16px; line-height: 1.6; color: #333; margin-bottom: 20px; }}
    .cta-button {{ display: inline-block; background: {color}; color: white; padding: 14px 32px; border-radius: 6px; text-decoration: none; font-weight: 600; margin-top: 20px; }}
    .footer {{ background: #f5f5f5; padding: 20px; text-align: center; font-size: 12px; color: #666; }}
    .meta {{ margin-top: 30px; padding-top: 20px; border-top: 1px solid #e5e5e5; font-size: 13px; color: #999; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>{title}</h1>
    </div>
    <div class="content">
      <p>{message}</p>
      <a href="#" class="cta-button">{cta}</a>
      <div class="meta">
        <p><strong>Sector:</strong> {sector}</p>
        <p><strong>Template:</strong> {template}</p>
        <p><strong>Generated:</strong> {generated_at}</p>
      </div>
    </div>
    <div class="footer">
      <p>&copy; 2025 Campaign Decision Platform. All rights reserved.</p>
    </div>
  </div>
</body>
</html>"##,
        name = client.name,
        title = campaign.title,
        cta = campaign.cta,
        sector = client.sector,
        template = campaign.template,
        generated_at = generated_at.to_rfc3339(),
    )
}
