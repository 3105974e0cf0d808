use crate::core::Transaction;
use crate::error::{BlockchainError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A batch of transactions sealed by the batcher.
///
/// The root hash stays unset until a Merkle tree is built over the block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    transactions: Vec<Transaction>,
    root_hash: Option<String>,
}

impl Block {
    pub fn new() -> Block {
        Block::default()
    }

    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn get_transactions(&self) -> &[Transaction] {
        self.transactions.as_slice()
    }

    pub fn get_transaction(&self, index: usize) -> Result<&Transaction> {
        self.transactions
            .get(index)
            .ok_or(BlockchainError::IndexOutOfBounds {
                index,
                len: self.transactions.len(),
            })
    }

    pub fn num_of_transactions(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn contains(&self, transaction: &Transaction) -> bool {
        self.transactions.contains(transaction)
    }

    /// Sum of the fees of every transaction in the block
    pub fn total_fees(&self) -> u64 {
        self.transactions.iter().map(Transaction::get_fee).sum()
    }

    pub fn get_root_hash(&self) -> Option<&str> {
        self.root_hash.as_deref()
    }

    pub fn set_root_hash(&mut self, root_hash: String) {
        self.root_hash = Some(root_hash);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Orders blocks by how many transactions they carry
    pub fn cmp_by_size(&self, other: &Block) -> Ordering {
        self.num_of_transactions().cmp(&other.num_of_transactions())
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_block_is_empty_without_root() {
        let block = Block::new();
        assert!(block.is_empty());
        assert_eq!(block.num_of_transactions(), 0);
        assert_eq!(block.get_root_hash(), None);
        assert_eq!(block.total_fees(), 0);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut block = Block::new();
        block.add_transaction(Transaction::new("a", "b", 1, 9));
        block.add_transaction(Transaction::new("c", "d", 2, 3));

        let senders: Vec<&str> = block.iter().map(|tx| tx.get_sender()).collect();
        assert_eq!(senders, vec!["a", "c"]);
        assert_eq!(block.total_fees(), 12);
        assert!(block.contains(&Transaction::new("c", "d", 2, 3)));
    }

    #[test]
    fn test_get_transaction_out_of_bounds() {
        let mut block = Block::new();
        block.add_transaction(Transaction::new("a", "b", 1, 1));

        assert!(block.get_transaction(0).is_ok());
        assert_eq!(
            block.get_transaction(3),
            Err(BlockchainError::IndexOutOfBounds { index: 3, len: 1 })
        );
    }

    #[test]
    fn test_cmp_by_size() {
        let mut small = Block::new();
        small.add_transaction(Transaction::new("a", "b", 1, 1));
        let mut large = small.clone();
        large.add_transaction(Transaction::new("c", "d", 1, 1));

        assert_eq!(small.cmp_by_size(&large), Ordering::Less);
        assert_eq!(large.cmp_by_size(&small), Ordering::Greater);
        assert_eq!(small.cmp_by_size(&small.clone()), Ordering::Equal);
    }
}
