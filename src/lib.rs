pub mod models;
pub use models::{FrequencyAnalyzer, Report, Tokenizer};

pub mod server;

pub mod types;
pub use types::{GroupedCounts, Token, WordCount, WordFrequencyMap};

pub mod utils;
pub use utils::sort_repeated_words;

/// Analyzes a text document and produces the full word-frequency report.
///
/// This is a total function: any input string, including the empty string or
/// text with no alphanumeric content, yields a well-formed [`Report`].
pub fn analyze_text(text: &str) -> Report {
    FrequencyAnalyzer::new().analyze(text)
}
