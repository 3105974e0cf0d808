//! Test utilities for merkle chain testing

use crate::core::Transaction;
use crate::error::{BlockchainError, Result};
use crate::storage::TransactionPool;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use tempfile::NamedTempFile;

/// The `i`-th deterministic sample transaction; every index gives a distinct record
pub fn sample_transaction(i: usize) -> Transaction {
    Transaction::new(
        &format!("sender{i}"),
        &format!("receiver{i}"),
        12_300 + i as i64,
        (i % 7) as u64 + 1,
    )
}

pub fn sample_transactions(count: usize) -> Vec<Transaction> {
    (0..count).map(sample_transaction).collect()
}

/// Seeded random transactions so failures are reproducible
pub fn random_transactions(count: usize, max_fee: u64, seed: u64) -> Vec<Transaction> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            Transaction::new(
                &format!("s{i}"),
                &format!("r{}", rng.gen_range(0..count.max(1))),
                rng.gen_range(1..100_000),
                rng.gen_range(0..=max_fee),
            )
        })
        .collect()
}

/// Pool holding one transaction per fee, named after its position in `fees`
pub fn create_test_pool(fees: &[u64]) -> TransactionPool {
    fees.iter()
        .enumerate()
        .map(|(i, fee)| {
            Transaction::new(&format!("sender{i}"), &format!("receiver{i}"), 1, *fee)
        })
        .collect()
}

/// Write transactions to a temporary file in the loader's line format
pub fn create_transactions_file(transactions: &[Transaction]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().map_err(|e| BlockchainError::Io(e.to_string()))?;
    for tx in transactions {
        writeln!(file, "{tx}")?;
    }
    Ok(file)
}
