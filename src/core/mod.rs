//! Core merkle chain functionality
//!
//! This module contains transactions, blocks, the fee-threshold batcher,
//! the Merkle tree built over each block and inclusion-proof verification.

pub mod block;
pub mod blockchain;
pub mod merkle;
pub mod proof;
pub mod transaction;

pub use block::Block;
pub use blockchain::Blockchain;
pub use merkle::{MerkleTree, TraversalOrder};
pub use proof::{verify_transaction, MerkleProof};
pub use transaction::Transaction;
