// This is the block batcher - it turns a fee-ordered pool into a chain of blocks
// Blocks are sealed as soon as their cumulative fee reaches the threshold

use crate::core::{Block, MerkleTree, Transaction};
use crate::error::{BlockchainError, Result};
use crate::storage::TransactionPool;
use log::{info, warn};

// The sealed blocks, in the order I sealed them
#[derive(Debug, Clone, Default)]
pub struct Blockchain {
    blocks: Vec<Block>,
}

impl Blockchain {
    // I drain the whole pool, highest fee first, and never look at it again
    pub fn new(pool: &mut TransactionPool, threshold: i64) -> Blockchain {
        if threshold <= 0 {
            warn!("Fee threshold {threshold} is not positive, sealing every transaction alone");
        }

        let mut blocks = Vec::new();
        let mut block = Block::new();
        let mut cumulative_fee: u64 = 0;

        while let Some(transaction) = pool.dequeue() {
            cumulative_fee += transaction.get_fee();
            block.add_transaction(transaction);

            if Self::threshold_reached(cumulative_fee, threshold) {
                blocks.push(std::mem::take(&mut block));
                cumulative_fee = 0;
            }
        }

        // The trailing block may never reach the threshold but still gets sealed
        if !block.is_empty() {
            blocks.push(block);
        }

        info!(
            "Sealed {} blocks with a fee threshold of {threshold}",
            blocks.len()
        );
        Blockchain { blocks }
    }

    // Convenience for when I already have the transactions in a plain list
    pub fn from_transactions<I>(transactions: I, threshold: i64) -> Blockchain
    where
        I: IntoIterator<Item = Transaction>,
    {
        let mut pool: TransactionPool = transactions.into_iter().collect();
        Self::new(&mut pool, threshold)
    }

    fn threshold_reached(cumulative_fee: u64, threshold: i64) -> bool {
        threshold <= 0 || cumulative_fee >= threshold as u64
    }

    // I build one tree per block, which also stamps each block with its root hash
    pub fn build_merkle_trees(&mut self) -> Vec<MerkleTree> {
        self.blocks.iter_mut().map(MerkleTree::new).collect()
    }

    pub fn get_block(&self, index: usize) -> Result<&Block> {
        self.blocks
            .get(index)
            .ok_or(BlockchainError::IndexOutOfBounds {
                index,
                len: self.blocks.len(),
            })
    }

    pub fn get_blocks(&self) -> &[Block] {
        self.blocks.as_slice()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

impl<'a> IntoIterator for &'a Blockchain {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
