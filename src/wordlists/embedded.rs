//! Embedded dictionaries
//!
//! Word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/three_letter.rs"));
include!(concat!(env!("OUT_DIR"), "/four_letter.rs"));
