use clap::Parser;
use log::error;
use std::io::{self, Read};
use wordfreq_analyzer::analyze_text;

/// Analyze text from stdin and print its word-frequency report.
#[derive(Debug, Parser)]
#[command(name = "wordfreq-cli")]
struct Args {
    /// Print the full report as pretty JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let args = Args::parse();

    // Read the input text from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    let report = analyze_text(&input);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if !report.repeated.is_empty() {
        println!("Repeated words:");
        for (word, count) in &report.repeated {
            println!("  {}: {}", word, count);
        }
    }

    if !report.unique.is_empty() {
        println!("Unique words:");
        for word in &report.unique {
            println!("  {}", word);
        }
    }

    println!("Total words: {}", report.total_words);
    println!("Unique word count: {}", report.unique_word_count);
    println!("Repeated word count: {}", report.repeated_word_count);
}
