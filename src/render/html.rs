use chrono::DateTime;

const EXCERPT_LIMIT: usize = 200;

/// Render an RFC 3339 timestamp as a long-form date, e.g.
/// "January 5, 2024, 03:04 PM". Input that does not parse is passed
/// through unchanged rather than failing the page.
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%B %-d, %Y, %I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Excerpt for the list view: the first 200 characters with an ellipsis
/// marker when content was cut. Counts characters, not bytes, so
/// multi-byte content never splits mid-character.
pub fn excerpt(content: &str) -> String {
    if content.chars().count() > EXCERPT_LIMIT {
        let cut: String = content.chars().take(EXCERPT_LIMIT).collect();
        format!("{cut}...")
    } else {
        content.to_string()
    }
}
