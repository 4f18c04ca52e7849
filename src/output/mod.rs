// Output formatting — terminal display and report generation.

pub mod report;
pub mod terminal;

/// Format a metric the way results are shown everywhere: five decimals.
pub fn format_metric(value: f64) -> String {
    format!("{value:.5}")
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Respects UTF-8 character boundaries, so long non-ASCII file names never
/// cause a panic.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
