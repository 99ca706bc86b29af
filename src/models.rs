pub mod frequency_analyzer;
pub use frequency_analyzer::FrequencyAnalyzer;

pub mod report;
pub use report::Report;

pub mod tokenizer;
pub use tokenizer::Tokenizer;
