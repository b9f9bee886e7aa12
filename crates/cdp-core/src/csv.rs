//! Minimal quote-aware CSV primitives shared by ingestion and export.
//!
//! A `"` toggles the in-quote state; a `,` outside quotes ends a field.
//! Fields are trimmed. This matches the upstream data format, which only
//! uses quoting to embed literal commas.

/// Split one CSV line into trimmed fields, honoring double quotes.
#[must_use]
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == ',' && !in_quotes {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(c);
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Render one field for CSV output, quoting when it embeds a comma or
/// quote. Embedded quotes are doubled.
#[must_use]
pub fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
