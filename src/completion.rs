//! Completion candidate ranking
//!
//! Merges a document's word frequencies with the static keyword weights into
//! one candidate list. Ordering is carried entirely by the sort key: a
//! fixed-width, zero-padded rendering of `1_000_000 - count`, so that the
//! client's ascending lexicographic sort over `sortText` yields descending
//! frequency. Candidates are not prefix-filtered against the in-progress
//! token; only the exact token itself is excluded.

use std::collections::HashMap;

/// Subtrahend turning counts into ascending-sorts-descending keys.
const SORT_KEY_BASE: i64 = 1_000_000;

/// Width the key is zero-padded to.
const SORT_KEY_WIDTH: usize = 6;

/// Which mapping a candidate came from. No functional effect on ranking;
/// provenance only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    Document,
    Keyword,
}

/// One ranked completion candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionCandidate {
    pub label: String,
    pub sort_key: String,
    pub source: CandidateSource,
}

/// Ranking key for a frequency count.
///
/// The value is rendered in decimal and left-padded with `0` to six
/// characters, as string padding: a count past the base goes negative and
/// the sign lands inside the padding (`0000-1`), silently degrading the
/// ordering guarantee. The formula is kept exactly as-is; the bound is a
/// known limit, not something to widen.
pub fn sort_key(count: i64) -> String {
    format!("{:0>width$}", (SORT_KEY_BASE - count).to_string(), width = SORT_KEY_WIDTH)
}

/// Merge document and keyword frequencies into a candidate list, skipping
/// any key equal to `partial`.
///
/// Document-local candidates are listed first; the two sources are disjoint
/// by construction since the tokenizer never counts keyword-table members.
/// The final presentation order is the client's sort over the keys, not the
/// list order.
pub fn rank(
    partial: &str,
    doc_freqs: &HashMap<String, i64>,
    keyword_freqs: &HashMap<String, i64>,
) -> Vec<CompletionCandidate> {
    let mut candidates = Vec::with_capacity(doc_freqs.len() + keyword_freqs.len());
    collect(&mut candidates, partial, doc_freqs, CandidateSource::Document);
    collect(&mut candidates, partial, keyword_freqs, CandidateSource::Keyword);
    candidates
}

fn collect(
    out: &mut Vec<CompletionCandidate>,
    partial: &str,
    freqs: &HashMap<String, i64>,
    source: CandidateSource,
) {
    for (word, count) in freqs {
        if word == partial {
            continue;
        }
        out.push(CompletionCandidate {
            label: word.clone(),
            sort_key: sort_key(*count),
            source,
        });
    }
}
