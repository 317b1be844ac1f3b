//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or embedded constants.
//! Entries are split on any whitespace, uppercased, and kept only if they
//! form a valid word. Duplicates are dropped, keeping the first occurrence.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/four_letter_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_str(&content))
}

/// Parse whitespace-separated dictionary text
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::words_from_str;
///
/// let words = words_from_str("cat COT\n  dog x cat\n");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["CAT", "COT", "DOG"]);
/// ```
#[must_use]
pub fn words_from_str(text: &str) -> Vec<Word> {
    dedup_words(text.split_whitespace())
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::words_from_slice;
/// use word_ladder::wordlists::THREE_LETTER;
///
/// let words = words_from_slice(THREE_LETTER);
/// assert_eq!(words.len(), THREE_LETTER.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    dedup_words(slice.iter().copied())
}

fn dedup_words<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    entries
        .filter_map(|s| Word::new(s).ok())
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["cat", "COLD", "tails"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CAT");
        assert_eq!(words[1].text(), "COLD");
        assert_eq!(words[2].text(), "TAILS");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["cat", "toolong", "ab", "c4t", "dog"]);

        // Only "cat" and "dog" have 3 to 5 letters and nothing else
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CAT");
        assert_eq!(words[1].text(), "DOG");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let words = words_from_str("dog cat DOG cot Cat");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["DOG", "CAT", "COT"]);
    }

    #[test]
    fn non_ascii_tokens_are_dropped_not_rewritten() {
        let words = words_from_str("CAT baß BAT");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["CAT", "BAT"]);
    }

    #[test]
    fn splits_on_any_whitespace() {
        let words = words_from_str("CAT\tCOT\r\nCOG   DOG\n\nDOT");
        assert_eq!(words.len(), 5);
    }

    #[test]
    fn load_from_file_reads_dictionary() {
        let path = std::env::temp_dir().join(format!("word_ladder_loader_{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "cold cord card").unwrap();
            writeln!(file, "ward warm cold").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 5);
        assert_eq!(words[0].text(), "COLD");
        assert_eq!(words[4].text(), "WARM");
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/nonexistent/word_ladder/words.txt").is_err());
    }
}
