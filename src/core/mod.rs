//! Core domain types for word ladders
//!
//! This module contains the fundamental value types with no solver logic.

mod word;

pub use word::{MAX_WORD_LEN, MIN_WORD_LEN, WildcardKey, Word, WordError};
