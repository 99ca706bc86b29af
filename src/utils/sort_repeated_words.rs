use crate::types::{Token, WordCount, WordFrequencyMap};

/// Collects the repeated words out of a frequency map, ranked.
///
/// This function takes a `WordFrequencyMap`, keeps the entries whose count is
/// greater than one, and returns a sorted vector of `(Token, WordCount)`
/// pairs.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by count in descending order (higher count first).
/// - **Secondary:** If two words have the same count, sorts by word in
///   ascending lexicographical order for deterministic ordering.
///
/// ### Example:
/// ```rust
/// use std::collections::HashMap;
/// use wordfreq_analyzer::sort_repeated_words;
///
/// let mut counts = HashMap::new();
/// counts.insert("dog".to_string(), 1);
/// counts.insert("cat".to_string(), 3);
/// counts.insert("bird".to_string(), 2);
///
/// let repeated = sort_repeated_words(&counts);
/// assert_eq!(repeated, vec![
///     ("cat".to_string(), 3),
///     ("bird".to_string(), 2)
/// ]);
/// ```
pub fn sort_repeated_words(counts: &WordFrequencyMap) -> Vec<(Token, WordCount)> {
    let mut repeated: Vec<(Token, WordCount)> = counts
        .iter()
        .filter(|&(_, &count)| count > 1)
        .map(|(word, &count)| (word.to_owned(), count))
        .collect();

    repeated.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by count (descending)
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by word (ascending)
    });

    repeated
}
