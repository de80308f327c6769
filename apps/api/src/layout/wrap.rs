//! Greedy word wrapping by character count.
//!
//! Lines break on whitespace only. A word wider than the column limit is never split;
//! it sits on a line of its own.

/// Wraps `text` into lines of at most `width` characters (except over-long words).
///
/// Runs of whitespace collapse to single spaces. Blank input yields no lines.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
