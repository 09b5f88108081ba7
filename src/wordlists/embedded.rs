//! Embedded word lists
//!
//! Word lists compiled into the binary at build time, as `(length, words)` tables.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
