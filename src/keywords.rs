//! Static keyword table
//!
//! Baseline completions offered for every document, independent of its
//! contents. The table is built once at startup and owned by the server
//! state; nothing in it changes for the lifetime of the process.

use std::collections::HashMap;

/// Fixed weight shared by every keyword-table entry.
///
/// Under the `1_000_000 - count` sort key this places keywords ahead of any
/// word appearing fewer than eleven times in the document.
const KEYWORD_WEIGHT: i64 = 11;

/// Reserved words and builtins served as default candidates.
const KEYWORDS: &[&str] = &[
    "for",
    "range",
    "import",
    "int",
    "if",
    "elif",
    "else",
    "in",
    "open",
    "sort",
    "sorted",
    "def",
    "print",
    "continue",
    "break",
    "return",
    "not",
    "del",
    "eval",
    "True",
    "False",
    "str",
    "while",
    "and",
    "as",
    "is",
    "or",
    "try",
    "except",
    "finally",
    "raise",
    "assert",
    "with",
    "lambda",
    "yield",
    "async",
    "await",
    "class",
    "from",
    "global",
    "nonlocal",
    "pass",
    "None",
    "abs",
    "all",
    "any",
    "ascii",
    "bin",
    "bool",
    "breakpoint",
    "bytearray",
    "bytes",
    "callable",
    "chr",
    "classmethod",
    "compile",
    "complex",
    "delattr",
    "dict",
    "dir",
    "divmod",
    "enumerate",
    "exec",
    "filter",
    "float",
    "format",
    "frozenset",
    "getattr",
    "globals",
    "hasattr",
    "hash",
    "help",
    "hex",
    "id",
    "input",
    "isinstance",
    "issubclass",
    "iter",
    "len",
    "list",
    "locals",
    "map",
    "max",
    "memoryview",
    "min",
    "next",
    "object",
    "oct",
    "pow",
    "property",
    "repr",
    "reversed",
    "round",
    "set",
    "setattr",
    "slice",
    "staticmethod",
    "sum",
    "super",
    "tuple",
    "type",
    "vars",
    "zip",
    "__import__",
];

/// Immutable word -> weight mapping of reserved words.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    entries: HashMap<String, i64>,
}

impl KeywordTable {
    pub fn new() -> Self {
        let entries = KEYWORDS
            .iter()
            .map(|word| (word.to_string(), KEYWORD_WEIGHT))
            .collect();
        KeywordTable { entries }
    }

    /// Whether `word` is a keyword-table entry.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// The word -> weight entries, in ranking-input form.
    pub fn entries(&self) -> &HashMap<String, i64> {
        &self.entries
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_reserved_words_and_builtins() {
        let table = KeywordTable::new();
        assert!(table.contains("for"));
        assert!(table.contains("lambda"));
        assert!(table.contains("__import__"));
        assert!(!table.contains("cat"));
        assert!(!table.contains(""));
    }

    #[test]
    fn every_entry_carries_the_fixed_weight() {
        let table = KeywordTable::new();
        assert!(table.entries().values().all(|weight| *weight == 11));
    }

    #[test]
    fn list_has_no_duplicates() {
        let table = KeywordTable::new();
        assert_eq!(table.entries().len(), KEYWORDS.len());
    }
}
