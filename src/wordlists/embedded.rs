//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/wordle.rs"));
include!(concat!(env!("OUT_DIR"), "/termo.rs"));
