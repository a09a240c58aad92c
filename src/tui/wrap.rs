// Width-aware text helpers
//
// The page is assembled from pre-wrapped lines because section heights
// must be known before rendering (the visibility sweep needs measured
// regions). Widths use unicode-width so CJK and emoji don't break layout.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Word-wrap `text` to at most `width` display columns per line
///
/// Words longer than the width are hard-split. Always returns at least one
/// line so empty paragraphs still occupy a row.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            // Flush the current line, then hard-split the oversized word
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            for piece in hard_split(word, width) {
                lines.push(piece);
            }
            // Last piece could have accepted more words, but re-opening it
            // complicates the loop for no visible gain on prose content
            continue;
        }

        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Split a single word into pieces of at most `width` columns
fn hard_split(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;

    for c in word.chars() {
        let cw = c.width().unwrap_or(0);
        if piece_width + cw > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(c);
        piece_width += cw;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Truncate to `width` columns, appending an ellipsis when cut
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    let keep = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;

    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if used + cw > keep {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 15);
        assert!(lines.iter().all(|l| l.width() <= 15));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(wrap("hello world", 80), vec!["hello world"]);
    }

    #[test]
    fn empty_text_still_occupies_a_row() {
        assert_eq!(wrap("", 20), vec![String::new()]);
    }

    #[test]
    fn oversized_words_are_hard_split() {
        let lines = wrap("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 8), "hello w…");
        assert_eq!(truncate_to_width("short", 10), "short");
    }

    #[test]
    fn wide_chars_count_double() {
        // Each CJK glyph is two columns
        let lines = wrap("你好 世界 你好", 5);
        assert!(lines.iter().all(|l| l.width() <= 5));
    }
}
