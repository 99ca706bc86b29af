use crate::types::{Token, WordCount, WordFrequencyMap};
use serde::{Deserialize, Serialize};

/// The structured result of one analysis call.
///
/// Serializes to the JSON shape the frontend consumes: `repeated` becomes an
/// array of `[word, count]` pairs and the summary fields use camelCase names
/// (`totalWords`, `uniqueWordCount`, `repeatedWordCount`).
///
/// Invariants upheld by [`FrequencyAnalyzer::analyze`](crate::FrequencyAnalyzer::analyze):
/// every key of `counts` appears in exactly one of `unique` (count == 1) or
/// `repeated` (count >= 2), `total_words` equals the sum of all counts, and
/// both sequences are deterministically ordered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Words occurring exactly once, in ascending lexicographic order.
    pub unique: Vec<Token>,

    /// Words occurring more than once, ranked by count descending; equal
    /// counts are ordered by word ascending.
    pub repeated: Vec<(Token, WordCount)>,

    /// The full word-frequency map.
    pub counts: WordFrequencyMap,

    /// Total number of words extracted, duplicates included.
    pub total_words: usize,

    /// Number of entries in `unique`.
    pub unique_word_count: usize,

    /// Number of entries in `repeated`.
    pub repeated_word_count: usize,
}
