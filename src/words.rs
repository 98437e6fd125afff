//! Word-frequency tokenizer
//!
//! Derives the completion candidate pool from raw document text. Words are
//! maximal runs of identifier characters (Unicode letters, digits, or `_`);
//! keyword-table entries are excluded from the counts so the static table
//! remains the only source of their weight.

use std::collections::HashMap;

use crate::keywords::KeywordTable;

/// Whether `c` extends the current word.
pub fn is_word_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Count the occurrences of every non-keyword word in `text`.
///
/// The scan accumulates into a single reusable buffer and flushes on each
/// delimiter; the trailing word is flushed identically at end of input, so a
/// document without a final newline still counts its last word. Empty input
/// yields an empty map. There are no error cases.
pub fn word_frequencies(text: &str, keywords: &KeywordTable) -> HashMap<String, i64> {
    let mut counts = HashMap::new();
    let mut word = String::new();

    for c in text.chars() {
        if is_word_char(c) {
            word.push(c);
        } else {
            tally(&mut counts, &mut word, keywords);
        }
    }
    tally(&mut counts, &mut word, keywords);

    counts
}

/// Flush the current word into `counts` unless it is empty or a keyword.
fn tally(counts: &mut HashMap<String, i64>, word: &mut String, keywords: &KeywordTable) {
    if word.is_empty() {
        return;
    }
    if keywords.contains(word) {
        word.clear();
        return;
    }
    *counts.entry(std::mem::take(word)).or_insert(0) += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freqs(text: &str) -> HashMap<String, i64> {
        word_frequencies(text, &KeywordTable::new())
    }

    #[test]
    fn counts_repeated_words() {
        let counts = freqs("cat cat dog");
        assert_eq!(counts.get("cat"), Some(&2));
        assert_eq!(counts.get("dog"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn empty_input_yields_empty_map() {
        assert!(freqs("").is_empty());
    }

    #[test]
    fn delimiter_only_input_yields_empty_map() {
        assert!(freqs("  .,;!\n\t  ").is_empty());
    }

    #[test]
    fn excludes_keywords() {
        let counts = freqs("for cat in cats");
        assert_eq!(counts.get("for"), None);
        assert_eq!(counts.get("in"), None);
        assert_eq!(counts.get("cat"), Some(&1));
        assert_eq!(counts.get("cats"), Some(&1));
    }

    #[test]
    fn excludes_keyword_at_end_of_input() {
        let counts = freqs("cat for");
        assert_eq!(counts.get("for"), None);
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn flushes_trailing_word_without_delimiter() {
        let counts = freqs("cat dog");
        assert_eq!(counts.get("dog"), Some(&1));
    }

    #[test]
    fn identifier_only_input_is_a_single_entry() {
        let counts = freqs("hello_42");
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("hello_42"), Some(&1));
    }

    #[test]
    fn underscores_and_digits_extend_words() {
        let counts = freqs("a_1 b2 _c");
        assert_eq!(counts.get("a_1"), Some(&1));
        assert_eq!(counts.get("b2"), Some(&1));
        assert_eq!(counts.get("_c"), Some(&1));
    }

    #[test]
    fn unicode_letters_are_word_characters() {
        let counts = freqs("héllo wörld héllo");
        assert_eq!(counts.get("héllo"), Some(&2));
        assert_eq!(counts.get("wörld"), Some(&1));
    }

    #[test]
    fn newlines_delimit_words() {
        let counts = freqs("cat\ndog\ncat");
        assert_eq!(counts.get("cat"), Some(&2));
        assert_eq!(counts.get("dog"), Some(&1));
    }

    #[test]
    fn punctuation_splits_dotted_paths() {
        let counts = freqs("foo.bar.foo");
        assert_eq!(counts.get("foo"), Some(&2));
        assert_eq!(counts.get("bar"), Some(&1));
    }
}
