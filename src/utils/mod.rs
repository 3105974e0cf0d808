//! Utility functions and helpers
//!
//! This module contains the hash primitive used for Merkle leaves and
//! inner nodes.

pub mod crypto;

pub use crypto::{combine, digest, sha256_digest, DUMMY_PREIMAGE};
