//! Cursor-context resolution
//!
//! Given document text and an LSP position, derives the partial identifier
//! under the cursor and the dotted lead-up path before it: for `foo.bar.ba`
//! with the cursor after `ba`, the lead-up is `["foo", "bar"]` and the
//! partial is `"ba"`. The lead-up is surfaced for diagnostics only; ranking
//! does not filter on it.

use crate::words::is_word_char;

/// Identifier context at a cursor position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CursorContext {
    /// Dot-separated path segments preceding the current token.
    pub lead_up: Vec<String>,
    /// In-progress token text at the cursor.
    pub partial: String,
}

impl CursorContext {
    /// Dotted rendering of the context, e.g. `foo.bar.ba`.
    pub fn dotted(&self) -> String {
        let mut out = String::new();
        for segment in &self.lead_up {
            out.push_str(segment);
            out.push('.');
        }
        out.push_str(&self.partial);
        out
    }
}

/// Resolve the identifier context at `(line, character)` in `text`.
///
/// The scan walks the whole target line, so `lead_up` reflects the state at
/// the end of the line while `partial` is captured exactly at the requested
/// offset. The within-line counter is incremented before each character is
/// examined and compared to `character` after the word buffer is updated;
/// the newline character takes part in that comparison before the counter
/// resets, which is what resolves a position one past the end of a non-final
/// line. A position one past the last character of the final line is handled
/// by the capture after the loop. Positions are counted in Unicode scalar
/// values.
///
/// There is no failure mode: any out-of-range position yields whatever
/// context was accumulated when the scan terminated, and a line beyond the
/// document yields an empty context.
pub fn resolve(text: &str, line: u32, character: u32) -> CursorContext {
    let target_line = line as usize;
    let target_char = character as usize;

    let mut cur_line = 0usize;
    let mut line_pos = 0usize;
    let mut word = String::new();
    let mut partial = String::new();
    let mut lead_up: Vec<String> = Vec::new();

    for c in text.chars() {
        line_pos += 1;

        if c == '\n' {
            if cur_line == target_line && line_pos == target_char {
                partial = word.clone();
            }
            cur_line += 1;
            line_pos = 0;
            if cur_line > target_line {
                break;
            }
        } else if cur_line == target_line {
            if is_word_char(c) {
                word.push(c);
            } else if c == '.' {
                lead_up.push(std::mem::take(&mut word));
            } else {
                // Any other separator abandons the dotted path entirely.
                lead_up.clear();
                word.clear();
            }

            if line_pos == target_char {
                partial = word.clone();
            }
        }
    }

    if line_pos + 1 == target_char && cur_line == target_line {
        partial = word;
    }

    CursorContext { lead_up, partial }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::dotted_path("foo.bar.baz", 0, 11, &["foo", "bar"], "baz")]
    #[case::second_line("x = 1\nfoo.b", 1, 5, &["foo"], "b")]
    #[case::one_past_final_line("foo.bar.baz", 0, 12, &["foo", "bar"], "baz")]
    #[case::mid_word("foobar", 0, 3, &[], "foo")]
    #[case::just_after_dot("foo.", 0, 4, &["foo"], "")]
    #[case::in_progress_segment("foo.bar.ba", 0, 10, &["foo", "bar"], "ba")]
    fn resolves_partial_and_lead_up(
        #[case] text: &str,
        #[case] line: u32,
        #[case] character: u32,
        #[case] lead_up: &[&str],
        #[case] partial: &str,
    ) {
        let context = resolve(text, line, character);
        assert_eq!(context.partial, partial);
        assert_eq!(context.lead_up, lead_up);
    }

    #[test]
    fn lead_up_reflects_end_of_line_state() {
        // The capture point is mid-line but the scan walks the whole line;
        // the space after "bar" wipes the dotted path that was live at the
        // cursor, while the captured partial stays.
        let context = resolve("foo.bar baz", 0, 7);
        assert_eq!(context.partial, "bar");
        assert!(context.lead_up.is_empty());
    }

    #[test]
    fn non_dot_separator_resets_lead_up() {
        let context = resolve("foo.bar baz", 0, 11);
        assert_eq!(context.partial, "baz");
        assert!(context.lead_up.is_empty());
    }

    #[test]
    fn position_one_past_end_of_non_final_line() {
        // "ab" is two characters; character 3 lands on the newline itself.
        let context = resolve("ab\ncd", 0, 3);
        assert_eq!(context.partial, "ab");
    }

    #[test]
    fn line_beyond_document_yields_empty_context() {
        let context = resolve("abc", 3, 1);
        assert_eq!(context, CursorContext::default());
    }

    #[test]
    fn character_zero_yields_empty_partial() {
        let context = resolve("cat cat dog", 0, 0);
        assert_eq!(context.partial, "");
    }

    #[test]
    fn empty_document_yields_empty_context() {
        assert_eq!(resolve("", 0, 0), CursorContext::default());
        assert_eq!(resolve("", 0, 1), CursorContext::default());
    }

    #[test]
    fn document_without_newline_resolves_on_line_zero() {
        let context = resolve("alpha beta", 0, 10);
        assert_eq!(context.partial, "beta");
    }

    #[test]
    fn dotted_rendering_joins_segments() {
        let context = resolve("foo.bar.ba", 0, 10);
        assert_eq!(context.dotted(), "foo.bar.ba");
    }

    #[test]
    fn consecutive_dots_record_empty_segments() {
        let context = resolve("a..b", 0, 4);
        assert_eq!(context.lead_up, vec!["a".to_string(), String::new()]);
        assert_eq!(context.partial, "b");
    }
}
