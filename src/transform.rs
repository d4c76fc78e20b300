//! Line joining
//!
//! Collapses multi-line text into a single line: every line is trimmed, blank
//! lines are dropped and the rest are joined with one space.

/// Characters that end a line.
///
/// Covers `\n`, `\r` (so `\r\n` too), vertical tab, form feed, the file, group
/// and record separators, NEL, and the Unicode line and paragraph separators.
pub const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}'..='\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Join all non-blank lines of `text` into one space-separated line.
pub fn join_lines(text: &str) -> String {
    let mut joined = String::with_capacity(text.len());

    for line in text.split(is_line_break) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(line);
    }

    joined
}
