//! Basic usage example for the wordflip API

use wordflip_api::{process_text, reverse_text, Config, Operation, TextProcessor};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Simplest usage with convenience functions
    println!("=== Method 1: Convenience Functions ===");
    let output = process_text("It's a mother-in-law's up-to-date list, isn't it?")?;

    println!("Found {} words:", output.words.len());
    for (i, word) in output.words.iter().enumerate() {
        match word.span {
            Some(span) => println!(
                "  Word {}: {:?} at chars {:?}",
                i + 1,
                word.text,
                span.char_range()
            ),
            None => println!("  Word {}: {:?}", i + 1, word.text),
        }
    }

    let output = reverse_text("Hello, мир! 42 items.")?;
    println!("Reversed: {}", output.reversed.unwrap_or_default());
    println!("Processing took {}us\n", output.metadata.processing_time_us);

    // Method 2: Custom configuration
    println!("=== Method 2: Custom Configuration ===");
    let config = Config::builder()
        .operation(Operation::Split)
        .include_spans(false)
        .max_input_bytes(Some(64 * 1024))
        .build()?;
    let processor = TextProcessor::with_config(config)?;

    let output = processor.process_text("Ёжик в тумане")?;
    println!("Words: {:?}", output.word_texts());

    Ok(())
}
