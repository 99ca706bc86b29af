pub mod sort_repeated_words;

pub use sort_repeated_words::sort_repeated_words;
