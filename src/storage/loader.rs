use crate::core::Transaction;
use crate::error::{BlockchainError, Result};
use crate::storage::TransactionPool;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Reads a transaction file into a fee-ordered pool.
///
/// Each non-blank line holds one `sender receiver amount fee` record.
pub fn load_transactions<P: AsRef<Path>>(path: P) -> Result<TransactionPool> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        BlockchainError::Io(format!(
            "Failed to read transactions from {}: {e}",
            path.display()
        ))
    })?;

    let pool = parse_transactions(&contents)?;
    info!(
        "Loaded {} transactions from {}",
        pool.len(),
        path.display()
    );
    Ok(pool)
}

pub fn parse_transactions(contents: &str) -> Result<TransactionPool> {
    let mut pool = TransactionPool::new();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            debug!("Skipping blank line {}", idx + 1);
            continue;
        }
        pool.enqueue(Transaction::parse_line(line, idx + 1)?);
    }
    Ok(pool)
}
