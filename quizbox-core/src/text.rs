//! Fixed-width display text helpers
//!
//! The character LCD has no notion of alignment, so centering is done by
//! building full-width, space-padded lines. Full-width output matters:
//! writing the whole row overwrites stale characters left from the
//! previous screen without an extra clear.

use core::fmt::Write;

use heapless::String;

use crate::quiz::RoundScore;

/// Center `text` in an `N`-column row, padding with spaces on both sides
///
/// Text longer than the row is truncated (at a char boundary; display
/// text is expected to be ASCII anyway). When the padding is odd the
/// extra space goes to the right.
pub fn centered<const N: usize>(text: &str) -> String<N> {
    let visible = prefix(text, N);
    let pad = (N - visible.len()) / 2;

    let mut out: String<N> = String::new();
    for _ in 0..pad {
        let _ = out.push(' ');
    }
    let _ = out.push_str(visible);
    while out.push(' ').is_ok() {}
    out
}

/// The two-line "Round complete" screen for a finished round
pub fn round_summary<const N: usize>(score: RoundScore) -> (String<N>, String<N>) {
    let mut tally: String<24> = String::new();
    let _ = write!(tally, "Score: {}/{}", score.correct, score.total);
    (centered("Round complete"), centered(&tally))
}

/// Longest prefix of `text` that fits in `max` bytes, on a char boundary
fn prefix(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_with_even_padding() {
        let line = centered::<16>("Correct!");
        assert_eq!(line.as_str(), "    Correct!    ");
        assert_eq!(line.len(), 16);
    }

    #[test]
    fn odd_padding_leans_left() {
        let line = centered::<16>("Wrong");
        assert_eq!(line.as_str(), "     Wrong      ");
    }

    #[test]
    fn overlong_text_is_truncated_to_the_row() {
        let line = centered::<16>("a very long line that cannot fit");
        assert_eq!(line.as_str(), "a very long line");
    }

    #[test]
    fn empty_text_gives_a_blank_row() {
        let line = centered::<16>("");
        assert_eq!(line.as_str(), " ".repeat(16));
    }

    #[test]
    fn summary_screen_is_centered_per_row() {
        let score = RoundScore {
            correct: 2,
            total: 3,
        };
        let (top, bottom) = round_summary::<16>(score);
        assert_eq!(top.as_str(), " Round complete ");
        assert_eq!(bottom.as_str(), "   Score: 2/3   ");
    }
}
