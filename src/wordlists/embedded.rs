//! Embedded word list
//!
//! Target words compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
