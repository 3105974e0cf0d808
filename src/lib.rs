//! # Merkle Chain - fee-batched blocks with Merkle inclusion proofs
//!
//! Transactions are drained from a fee-ordered pool into blocks, and each
//! block gets a Merkle tree whose root commits to all of its transactions.
//!
//! ## How the Code Is Organized
//! - `core/`: transactions, blocks, the fee-threshold batcher, Merkle trees and proofs
//! - `storage/`: the fee-ordered transaction pool and the transaction file loader
//! - `config/`: process-wide settings from the environment and a TOML file
//! - `utils/`: the SHA-256 digest and the pairwise combine used by the tree
//! - `cli/`: command-line parsing and report rendering
//!
//! ## Reading Order
//! 1. `core/blockchain.rs` for how blocks are sealed
//! 2. `core/merkle.rs` for tree construction, traversals and proof extraction
//! 3. `core/proof.rs` for verification

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;
pub mod utils;

#[cfg(test)]
pub mod testing;

// Re-export commonly used types for convenience
pub use cli::{Command, Opt};
pub use config::{Config, GLOBAL_CONFIG};
pub use core::{
    verify_transaction, Block, Blockchain, MerkleProof, MerkleTree, Transaction, TraversalOrder,
};
pub use error::{BlockchainError, Result};
pub use storage::{load_transactions, parse_transactions, TransactionPool};
pub use utils::{combine, digest, sha256_digest};
