use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a normalized word as an owned `String`. Tokens are lowercase and
/// restricted to ASCII letters and digits.
pub type Token = String;

/// Represents the number of occurrences of a word within a text document.
pub type WordCount = usize;

/// Represents a map of words to their occurrence counts within a text document.
/// The key is the `Token`, and the value is the `WordCount`.
pub type WordFrequencyMap = HashMap<Token, WordCount>;

/// The intermediate multimap produced by the shuffle phase: each word mapped to
/// the list of unit counts emitted for it during the map phase.
pub type GroupedCounts = HashMap<Token, Vec<WordCount>>;
