use crate::types::Token;
use log::debug;

/// Handles text normalization and word extraction.
///
/// The tokenizer holds no state between calls; it is an ordinary `Copy` value
/// and concurrent use needs no coordination.
#[derive(Copy, Clone, Debug, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Extracts normalized words from the given text.
    ///
    /// Lowercases the whole input, then collects every maximal run of ASCII
    /// letters and digits. Punctuation, underscores, whitespace, and
    /// non-ASCII letters all act as separators. The result preserves
    /// left-to-right order and keeps duplicates.
    pub fn extract_words(self, text: &str) -> Vec<Token> {
        let normalized = text.to_lowercase();

        let words: Vec<Token> = normalized
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|word| !word.is_empty())
            .map(Token::from)
            .collect();

        debug!("Tokenizer extracted {} words from input", words.len());
        words
    }
}
