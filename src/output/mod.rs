// Output formatting — terminal display and JSON reports.

pub mod report;
pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..."
/// when something was cut. Char-based, so multi-byte labels (emoji,
/// accented URLs) never panic the way byte slicing would.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
