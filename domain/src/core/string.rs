//! String utilities for the domain layer.

/// Single-line preview of model output for log lines.
///
/// Runs of whitespace (newlines included) collapse to one space, and the
/// result is cut to at most `max_chars` characters, the last being `…`.
pub fn one_line_preview(s: &str, max_chars: usize) -> String {
    let mut words = s.split_whitespace();
    let mut flat = String::with_capacity(s.len().min(max_chars * 4));
    if let Some(first) = words.next() {
        flat.push_str(first);
        for word in words {
            flat.push(' ');
            flat.push_str(word);
        }
    }

    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut cut: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
