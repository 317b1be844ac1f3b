//! Build script to generate embedded dictionaries
//!
//! Reads whitespace-separated word files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/three_letter_words.txt",
        &Path::new(&out_dir).join("three_letter.rs"),
        "THREE_LETTER",
        "Three-letter dictionary words",
    );

    generate_word_list(
        "data/four_letter_words.txt",
        &Path::new(&out_dir).join("four_letter.rs"),
        "FOUR_LETTER",
        "Four-letter dictionary words",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/three_letter_words.txt");
    println!("cargo:rerun-if-changed=data/four_letter_words.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Files may hold several words per line
    let mut words: Vec<String> = content
        .split_whitespace()
        .map(str::to_uppercase)
        .collect();
    words.sort();
    words.dedup();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment} ({count} words)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
