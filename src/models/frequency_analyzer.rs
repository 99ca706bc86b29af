use crate::models::{Report, Tokenizer};
use crate::types::{GroupedCounts, Token, WordCount, WordFrequencyMap};
use crate::utils::sort_repeated_words;
use log::debug;

/// Runs the map-reduce style word-frequency pipeline over a text document.
///
/// The three phases (map, shuffle, reduce) are kept as named steps with an
/// explicit intermediate multimap so each can be exercised on its own; the
/// observable result is the same as a single-pass tally. The analyzer holds
/// no cross-call state and is freely shareable between concurrent requests.
#[derive(Copy, Clone, Debug, Default)]
pub struct FrequencyAnalyzer {
    tokenizer: Tokenizer,
}

impl FrequencyAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map phase: emit a `(word, 1)` pair for every word occurrence.
    ///
    /// Performs no aggregation; the output is congruent with the input
    /// sequence.
    pub fn map_phase(self, words: &[Token]) -> Vec<(Token, WordCount)> {
        let pairs: Vec<(Token, WordCount)> =
            words.iter().map(|word| (word.clone(), 1)).collect();

        debug!("Map phase emitted {} key-value pairs", pairs.len());
        pairs
    }

    /// Shuffle phase: group the emitted unit counts by word.
    pub fn shuffle_phase(self, pairs: Vec<(Token, WordCount)>) -> GroupedCounts {
        let mut grouped = GroupedCounts::new();

        for (word, count) in pairs {
            grouped.entry(word).or_default().push(count);
        }

        debug!("Shuffle phase grouped pairs under {} keys", grouped.len());
        grouped
    }

    /// Reduce phase: sum each word's unit counts into its total.
    pub fn reduce_phase(self, grouped: GroupedCounts) -> WordFrequencyMap {
        let counts: WordFrequencyMap = grouped
            .into_iter()
            .map(|(word, unit_counts)| {
                let total: WordCount = unit_counts.iter().sum();
                (word, total)
            })
            .collect();

        debug!("Reduce phase produced {} totals", counts.len());
        counts
    }

    /// Runs the full pipeline and shapes the result into a [`Report`].
    ///
    /// Empty and whitespace-only input short-circuits to an all-zero report;
    /// no input string is an error.
    pub fn analyze(self, text: &str) -> Report {
        if text.trim().is_empty() {
            return Report::default();
        }

        let words = self.tokenizer.extract_words(text);
        let pairs = self.map_phase(&words);
        let grouped = self.shuffle_phase(pairs);
        let counts = self.reduce_phase(grouped);

        let mut unique: Vec<Token> = counts
            .iter()
            .filter(|&(_, &count)| count == 1)
            .map(|(word, _)| word.clone())
            .collect();
        unique.sort();

        let repeated = sort_repeated_words(&counts);

        Report {
            total_words: words.len(),
            unique_word_count: unique.len(),
            repeated_word_count: repeated.len(),
            unique,
            repeated,
            counts,
        }
    }
}
