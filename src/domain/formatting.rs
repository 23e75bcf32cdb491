/// Source label used when the provider omits `source.name`.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// Date label used when the provider omits `publishedAt`.
pub const UNKNOWN_DATE: &str = "Unknown date";

pub const NO_DESCRIPTION: &str = "No description available";

/// Image shown on cards whose article has no `urlToImage`.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x200";

/// Format a provider timestamp as a calendar date.
///
/// Takes the first 10 characters of the string as-is (the `YYYY-MM-DD`
/// prefix of an ISO-8601 timestamp). No parsing or timezone conversion is
/// applied, so whatever the provider sent is what the reader sees.
pub fn display_date(published_at: Option<&str>) -> String {
    match published_at {
        Some(value) => match value.char_indices().nth(10) {
            Some((end, _)) => value[..end].to_string(),
            None => value.to_string(),
        },
        None => UNKNOWN_DATE.to_string(),
    }
}

/// Format a refresh interval for the sidebar note, e.g. "5 minutes".
pub fn format_interval(secs: u64) -> String {
    if secs % 60 == 0 {
        match secs / 60 {
            1 => "1 minute".to_string(),
            mins => format!("{mins} minutes"),
        }
    } else if secs == 1 {
        "1 second".to_string()
    } else {
        format!("{secs} seconds")
    }
}
