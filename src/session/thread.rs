//! Thread formatting
//!
//! Joins a caption batch into one payload for posting as a numbered thread.

/// Separator placed between thread entries
pub const THREAD_SEPARATOR: &str = "\n\n👇\n\n";

/// Format captions as `"{i}/{n} {caption}"` entries joined by [`THREAD_SEPARATOR`]
///
/// Returns `None` for an empty batch.
pub fn format_thread(captions: &[String]) -> Option<String> {
    if captions.is_empty() {
        return None;
    }

    let total = captions.len();
    let entries: Vec<String> = captions
        .iter()
        .enumerate()
        .map(|(i, caption)| format!("{}/{} {}", i + 1, total, caption))
        .collect();

    Some(entries.join(THREAD_SEPARATOR))
}
