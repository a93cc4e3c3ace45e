// @module: Splitting raw text into caption lines

pub const BYTE_ORDER_MARK: char = '\u{feff}';

// @checks: Line has nothing but whitespace or byte order marks
fn is_blank(line: &str) -> bool {
    line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
        .is_empty()
}

/// Split raw text into the ordered lines that become cues.
///
/// Lines are separated on `\n`. A line is kept when its trimmed content is
/// non-empty, but the returned slice is the original, untrimmed line.
/// U+FEFF counts as whitespace for the emptiness test.
pub fn split_lines(raw: &str) -> Vec<&str> {
    raw.split('\n')
        .filter(|line| !is_blank(line))
        .collect()
}

// @returns: Number of lines split_lines would yield
pub fn count_lines(raw: &str) -> usize {
    raw.split('\n').filter(|line| !is_blank(line)).count()
}

/// Drop one leading byte order mark, as text editors often save one.
pub fn strip_byte_order_mark(mut text: String) -> String {
    if text.starts_with(BYTE_ORDER_MARK) {
        text.remove(0);
    }
    text
}
