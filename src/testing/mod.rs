//! Shared fixtures for unit tests
//!
//! Deterministic and seeded-random transaction sets, pools and on-disk
//! transaction files.

pub mod test_utils;

pub use test_utils::*;
