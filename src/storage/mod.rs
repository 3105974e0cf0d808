//! Transaction intake
//!
//! This module holds the fee-ordered pool of pending transactions and the
//! loader that fills it from a text file.

pub mod loader;
pub mod transaction_pool;

pub use loader::{load_transactions, parse_transactions};
pub use transaction_pool::TransactionPool;
