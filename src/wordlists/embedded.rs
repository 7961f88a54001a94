//! Embedded builtin word list
//!
//! Generated at build time from `data/words.txt` by the build script.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
