//! Dictionary word representation
//!
//! A Word is an immutable uppercase ASCII string of 3 to 5 letters.

use std::borrow::Borrow;
use std::fmt;

/// Shortest word accepted into a dictionary
pub const MIN_WORD_LEN: usize = 3;

/// Longest word accepted into a dictionary
pub const MAX_WORD_LEN: usize = 5;

/// Placeholder byte used for the blanked position of a wildcard key
const WILDCARD: u8 = b'*';

/// An uppercase dictionary word
///
/// Hashes and compares exactly like its text, so maps keyed by `Word`
/// can be queried with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(
                    f,
                    "Word must be {MIN_WORD_LEN}-{MAX_WORD_LEN} letters, got {len}"
                )
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

/// A word with one position blanked out, e.g. `CO*` for `COT`
///
/// Every word sharing all other letters maps to the same key, which is what
/// makes one-letter neighbors cheap to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WildcardKey {
    bytes: [u8; MAX_WORD_LEN],
    len: u8,
}

impl WildcardKey {
    /// The key as text, with `*` in the blanked position
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Built only from ASCII letters and the ASCII placeholder
        std::str::from_utf8(&self.bytes[..usize::from(self.len)]).unwrap_or_default()
    }
}

impl fmt::Display for WildcardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside 3..=5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("cold").unwrap();
    /// assert_eq!(word.text(), "COLD");
    ///
    /// assert!(Word::new("ab").is_err());
    /// assert!(Word::new("c0ld").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let mut text: String = text.into();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&text.len()) {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        text.make_ascii_uppercase();
        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a validated word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Count of positions where the two words differ
    ///
    /// Only the shared prefix is compared. For same-length words this is the
    /// Hamming distance, which never overstates the number of ladder steps
    /// between them.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let cold = Word::new("COLD").unwrap();
    /// let warm = Word::new("WARM").unwrap();
    /// assert_eq!(cold.distance(&warm), 4);
    /// ```
    #[must_use]
    pub fn distance(&self, other: &Self) -> usize {
        self.chars()
            .iter()
            .zip(other.chars())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// True if both words have the same length and differ in exactly one position
    #[must_use]
    pub fn is_neighbor_of(&self, other: &Self) -> bool {
        self.len() == other.len() && self.distance(other) == 1
    }

    /// The wildcard key with `position` blanked
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[must_use]
    pub fn wildcard_key(&self, position: usize) -> WildcardKey {
        let mut bytes = [0u8; MAX_WORD_LEN];
        bytes[..self.len()].copy_from_slice(self.chars());
        bytes[position] = WILDCARD;
        WildcardKey {
            bytes,
            len: self.len() as u8,
        }
    }

    /// All wildcard keys of this word, one per position
    pub fn wildcard_keys(&self) -> impl Iterator<Item = WildcardKey> + '_ {
        (0..self.len()).map(|position| self.wildcard_key(position))
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("COLD").unwrap();
        assert_eq!(word.text(), "COLD");
        assert_eq!(word.chars(), b"COLD");
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("cold").unwrap();
        assert_eq!(word.text(), "COLD");

        let word2 = Word::new("CoLd").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(Word::new("ab"), Err(WordError::InvalidLength(2))));
        assert!(matches!(
            Word::new("ladder"),
            Err(WordError::InvalidLength(6))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("co1d"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(matches!(
            Word::new("co d"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(matches!(Word::new("cöld"), Err(WordError::NonAscii)));
        // Unicode case mapping would turn this into BASS
        assert!(matches!(Word::new("baß"), Err(WordError::NonAscii)));
        assert!(matches!(Word::new("ﬀab"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_accepts_all_supported_lengths() {
        assert!(Word::new("CAT").is_ok());
        assert!(Word::new("CATS").is_ok());
        assert!(Word::new("CARTS").is_ok());
    }

    #[test]
    fn distance_counts_differing_positions() {
        let cat = Word::new("CAT").unwrap();
        let cot = Word::new("COT").unwrap();
        let dog = Word::new("DOG").unwrap();

        assert_eq!(cat.distance(&cat), 0);
        assert_eq!(cat.distance(&cot), 1);
        assert_eq!(cat.distance(&dog), 3);
        assert_eq!(dog.distance(&cat), 3);
    }

    #[test]
    fn neighbor_requires_same_length() {
        let cat = Word::new("CAT").unwrap();
        let cot = Word::new("COT").unwrap();
        let cats = Word::new("CATS").unwrap();

        assert!(cat.is_neighbor_of(&cot));
        assert!(!cat.is_neighbor_of(&cat));
        assert!(!cat.is_neighbor_of(&cats));
    }

    #[test]
    fn wildcard_keys_blank_each_position() {
        let word = Word::new("SALT").unwrap();
        let keys: Vec<String> = word.wildcard_keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["*ALT", "S*LT", "SA*T", "SAL*"]);
    }

    #[test]
    fn wildcard_keys_shared_by_neighbors() {
        let cat = Word::new("CAT").unwrap();
        let cot = Word::new("COT").unwrap();
        assert_eq!(cat.wildcard_key(1), cot.wildcard_key(1));
        assert_ne!(cat.wildcard_key(0), cot.wildcard_key(0));
    }

    #[test]
    fn wildcard_keys_distinguish_lengths() {
        let cat = Word::new("CAT").unwrap();
        let cats = Word::new("CATS").unwrap();
        assert_ne!(cat.wildcard_key(0), cats.wildcard_key(0));
    }

    #[test]
    fn word_lookup_by_str() {
        let mut map: FxHashMap<Word, usize> = FxHashMap::default();
        map.insert(Word::new("COG").unwrap(), 7);
        assert_eq!(map.get("COG"), Some(&7));
        assert_eq!(map.get("cog"), None);
    }

    #[test]
    fn word_display() {
        let word = Word::new("warm").unwrap();
        assert_eq!(format!("{word}"), "WARM");
    }
}
