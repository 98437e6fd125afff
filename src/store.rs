//! Open-document bookkeeping
//!
//! One record per open URI: the full text and its derived word-frequency
//! index, kept in lockstep. Records are created by didOpen, replaced
//! wholesale by didChange, and never evicted; the store grows for the
//! lifetime of the process. There is no close handling.

use std::collections::HashMap;

use crate::keywords::KeywordTable;
use crate::words::word_frequencies;

/// An open document mirrored from the editor.
#[derive(Debug, Clone)]
pub struct OpenDocument {
    /// Opaque identifier; never parsed as a URL.
    pub uri: String,
    /// Full current content, replaced on every change.
    pub text: String,
    /// Word -> occurrence count for `text`, keyword-table members excluded.
    /// Always exactly `word_frequencies(text)`; `put` recomputes it before
    /// the record becomes visible.
    pub frequencies: HashMap<String, i64>,
}

/// In-memory mapping of open documents, keyed by URI.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: HashMap<String, OpenDocument>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `text` for `uri`, recomputing the frequency index and
    /// overwriting any prior record. Arbitrary content is accepted.
    pub fn put(&mut self, uri: String, text: String, keywords: &KeywordTable) {
        let frequencies = word_frequencies(&text, keywords);
        self.documents.insert(
            uri.clone(),
            OpenDocument {
                uri,
                text,
                frequencies,
            },
        );
    }

    /// Look up an open document. `None` is the NotOpen condition; callers
    /// treat it as recoverable.
    pub fn get(&self, uri: &str) -> Option<&OpenDocument> {
        self.documents.get(uri)
    }
}
