//! Property-based tests for cursor-context resolution. The resolver has no
//! failure mode by contract: any position against any text must yield a
//! context, never a panic.

use proptest::prelude::*;
use tally_lsp::cursor::resolve;

proptest! {
    /// Arbitrary text and positions, including far out of range.
    #[test]
    fn never_panics(text in ".*", line in 0u32..16, character in 0u32..128) {
        let _ = resolve(&text, line, character);
    }

    /// The partial is always a run of identifier characters.
    #[test]
    fn partial_is_identifier_shaped(text in ".*", line in 0u32..8, character in 0u32..64) {
        let context = resolve(&text, line, character);
        prop_assert!(context.partial.chars().all(|c| c == '_' || c.is_alphanumeric()));
    }

    /// A line past the end of the document yields an empty context.
    #[test]
    fn line_beyond_document_is_empty(text in "[a-z .\n]{0,40}", character in 0u32..32) {
        let line_count = text.split('\n').count() as u32;
        let context = resolve(&text, line_count + 1, character);
        prop_assert_eq!(context.partial, "");
        prop_assert!(context.lead_up.is_empty());
    }
}
