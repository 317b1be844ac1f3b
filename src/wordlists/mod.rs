//! Dictionaries for building word graphs
//!
//! Provides embedded three- and four-letter lists compiled into the binary,
//! plus loaders for user-supplied files.

mod embedded;
pub mod loader;

use crate::core::Word;
pub use embedded::{FOUR_LETTER, FOUR_LETTER_COUNT, THREE_LETTER, THREE_LETTER_COUNT};

/// Every embedded word, three-letter words first
#[must_use]
pub fn all_words() -> Vec<Word> {
    let mut words = loader::words_from_slice(THREE_LETTER);
    words.extend(loader::words_from_slice(FOUR_LETTER));
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(THREE_LETTER.len(), THREE_LETTER_COUNT);
        assert_eq!(FOUR_LETTER.len(), FOUR_LETTER_COUNT);
    }

    #[test]
    fn embedded_words_are_uppercase_and_sized() {
        for &word in THREE_LETTER {
            assert_eq!(word.len(), 3, "Word '{word}' is not 3 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
        for &word in FOUR_LETTER {
            assert_eq!(word.len(), 4, "Word '{word}' is not 4 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_lists_hold_ladder_classics() {
        for word in ["CAT", "COT", "COG", "DOG", "DOT"] {
            assert!(THREE_LETTER.contains(&word), "missing {word}");
        }
        for word in ["COLD", "WARM", "HEAD", "TAIL", "SEED", "TREE"] {
            assert!(FOUR_LETTER.contains(&word), "missing {word}");
        }
    }

    #[test]
    fn all_words_combines_both_lists() {
        let words = all_words();
        assert_eq!(words.len(), THREE_LETTER_COUNT + FOUR_LETTER_COUNT);
        assert_eq!(words[0].len(), 3);
        assert_eq!(words[words.len() - 1].len(), 4);
    }
}
