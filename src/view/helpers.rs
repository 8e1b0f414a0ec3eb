//! Shared rendering helpers.

use unicode_width::UnicodeWidthChar;

/// First row of a scrolled window of `rows` over `len` items that keeps
/// `selected` visible.
///
/// Stateless, so repeated calls for the same selection agree.
pub fn visible_window(len: usize, selected: Option<usize>, rows: usize) -> usize {
    if rows == 0 || len <= rows {
        return 0;
    }
    match selected {
        Some(i) if i >= rows => (i + 1 - rows).min(len - rows),
        _ => 0,
    }
}

/// Truncate `text` to at most `width` display columns, then pad with spaces
/// to exactly `width`.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

/// First char of `text` to draw in a `width`-column field so the cell at
/// char index `cursor` (one past the end for an appended cursor) stays
/// visible.
pub fn cursor_window(text: &str, cursor: usize, width: usize) -> usize {
    let widths: Vec<usize> = text.chars().map(|c| c.width().unwrap_or(0)).collect();
    let mut start = cursor.min(widths.len());
    let mut used = widths.get(start).copied().unwrap_or(1).max(1);
    while start > 0 && used + widths[start - 1] <= width {
        start -= 1;
        used += widths[start];
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_starts_at_zero_when_everything_fits() {
        assert_eq!(visible_window(3, Some(2), 5), 0);
    }

    #[test]
    fn window_scrolls_to_keep_selection_visible() {
        assert_eq!(visible_window(10, Some(4), 3), 2);
        assert_eq!(visible_window(10, Some(9), 3), 7);
        assert_eq!(visible_window(10, Some(1), 3), 0);
    }

    #[test]
    fn window_is_idempotent() {
        let first = visible_window(10, Some(6), 4);
        let second = visible_window(10, Some(6), 4);
        assert_eq!(first, second);
    }

    #[test]
    fn window_without_selection_is_top() {
        assert_eq!(visible_window(10, None, 3), 0);
        assert_eq!(visible_window(10, Some(5), 0), 0);
    }

    #[test]
    fn fit_pads_short_text() {
        assert_eq!(fit_to_width("ab", 4), "ab  ");
    }

    #[test]
    fn fit_truncates_long_text() {
        assert_eq!(fit_to_width("abcdef", 3), "abc");
    }

    #[test]
    fn fit_respects_wide_chars() {
        // Each CJK char is two columns wide.
        assert_eq!(fit_to_width("日本語", 5), "日本 ");
    }

    #[test]
    fn cursor_window_starts_at_zero_while_text_fits() {
        assert_eq!(cursor_window("abc", 3, 10), 0);
        assert_eq!(cursor_window("abc", 1, 10), 0);
        assert_eq!(cursor_window("", 0, 4), 0);
    }

    #[test]
    fn cursor_window_scrolls_to_keep_cursor_cell_visible() {
        // "def" plus the appended cursor cell fill four columns.
        assert_eq!(cursor_window("abcdef", 6, 4), 3);
        // Cursor on 'c': "abc" fits in three columns.
        assert_eq!(cursor_window("abcdef", 2, 3), 0);
        assert_eq!(cursor_window("abcdef", 4, 3), 2);
    }

    #[test]
    fn cursor_window_counts_wide_chars() {
        // Cursor cell plus 語 is three columns; 本 would make five.
        assert_eq!(cursor_window("日本語", 3, 4), 2);
    }
}
