// This file defines the transaction record that gets batched into blocks
// The canonical string form is what I hash for each Merkle leaf, so it must never change

use crate::error::{BlockchainError, Result};
use crate::utils::digest;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// A value transfer with the fee it pays for inclusion
// Once I build one it never changes, so there are only getters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    sender: String,
    receiver: String,
    amount: i64,
    fee: u64, // Drives both the priority ordering and the block threshold
}

impl Transaction {
    pub fn new(sender: &str, receiver: &str, amount: i64, fee: u64) -> Transaction {
        Transaction {
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            amount,
            fee,
        }
    }

    pub fn get_sender(&self) -> &str {
        self.sender.as_str()
    }

    pub fn get_receiver(&self) -> &str {
        self.receiver.as_str()
    }

    pub fn get_amount(&self) -> i64 {
        self.amount
    }

    pub fn get_fee(&self) -> u64 {
        self.fee
    }

    /// Canonical `"<sender> <receiver> <amount> <fee>"` form used as the leaf preimage
    pub fn canonical_string(&self) -> String {
        self.to_string()
    }

    /// Hash of the canonical string; this is the leaf hash inside a Merkle tree
    pub fn leaf_hash(&self) -> String {
        digest(&self.canonical_string())
    }

    // I use this when parsing input files so errors can point at the right line
    pub fn parse_line(line: &str, line_number: usize) -> Result<Transaction> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(BlockchainError::InvalidTransaction {
                line: line_number,
                reason: format!("expected 4 fields, found {}", fields.len()),
            });
        }

        let amount = fields[2]
            .parse::<i64>()
            .map_err(|e| BlockchainError::InvalidTransaction {
                line: line_number,
                reason: format!("invalid amount '{}': {e}", fields[2]),
            })?;
        let fee = fields[3]
            .parse::<u64>()
            .map_err(|e| BlockchainError::InvalidTransaction {
                line: line_number,
                reason: format!("invalid fee '{}': {e}", fields[3]),
            })?;

        Ok(Transaction::new(fields[0], fields[1], amount, fee))
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.sender, self.receiver, self.amount, self.fee
        )
    }
}

impl FromStr for Transaction {
    type Err = BlockchainError;

    fn from_str(s: &str) -> Result<Self> {
        Transaction::parse_line(s, 1)
    }
}
