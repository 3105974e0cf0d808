use crate::core::Transaction;
use crate::error::{BlockchainError, Result};
use std::collections::VecDeque;

/// Pending transactions kept in descending fee order.
///
/// A transaction with the same fee as others already queued goes in front of
/// them, except when that fee run starts at the head: the head stays put and
/// the newcomer lands right behind it.
#[derive(Debug, Clone, Default)]
pub struct TransactionPool {
    inner: VecDeque<Transaction>,
}

impl TransactionPool {
    pub fn new() -> TransactionPool {
        TransactionPool {
            inner: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, tx: Transaction) {
        let fee = tx.get_fee();
        let mut idx = self.inner.partition_point(|queued| queued.get_fee() > fee);
        // Only a strictly lower head fee lets a newcomer take the head
        if idx == 0 && self.peek().is_some_and(|head| head.get_fee() == fee) {
            idx = 1;
        }
        self.inner.insert(idx, tx);
    }

    /// Removes the highest-fee transaction
    pub fn dequeue(&mut self) -> Option<Transaction> {
        self.inner.pop_front()
    }

    pub fn peek(&self) -> Option<&Transaction> {
        self.inner.front()
    }

    pub fn get(&self, index: usize) -> Result<&Transaction> {
        if self.inner.is_empty() {
            return Err(BlockchainError::EmptyContainer("transaction pool"));
        }
        self.inner
            .get(index)
            .ok_or(BlockchainError::IndexOutOfBounds {
                index,
                len: self.inner.len(),
            })
    }

    pub fn remove(&mut self, index: usize) -> Result<Transaction> {
        if self.inner.is_empty() {
            return Err(BlockchainError::EmptyContainer("transaction pool"));
        }
        let len = self.inner.len();
        self.inner
            .remove(index)
            .ok_or(BlockchainError::IndexOutOfBounds { index, len })
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, Transaction> {
        self.inner.iter()
    }
}

impl FromIterator<Transaction> for TransactionPool {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        let mut pool = TransactionPool::new();
        for tx in iter {
            pool.enqueue(tx);
        }
        pool
    }
}

impl Extend<Transaction> for TransactionPool {
    fn extend<I: IntoIterator<Item = Transaction>>(&mut self, iter: I) {
        for tx in iter {
            self.enqueue(tx);
        }
    }
}

impl<'a> IntoIterator for &'a TransactionPool {
    type Item = &'a Transaction;
    type IntoIter = std::collections::vec_deque::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fees(pool: &TransactionPool) -> Vec<u64> {
        pool.iter().map(Transaction::get_fee).collect()
    }

    #[test]
    fn test_enqueue_keeps_descending_fee_order() {
        let pool: TransactionPool = [3, 10, 5, 1, 7]
            .into_iter()
            .map(|fee| Transaction::new("s", "r", 1, fee))
            .collect();

        assert_eq!(fees(&pool), vec![10, 7, 5, 3, 1]);
        assert_eq!(pool.peek().map(Transaction::get_fee), Some(10));
    }

    fn senders(pool: &mut TransactionPool) -> Vec<String> {
        std::iter::from_fn(|| pool.dequeue())
            .map(|tx| tx.get_sender().to_string())
            .collect()
    }

    #[test]
    fn test_equal_fees_go_in_front_of_earlier_ones() {
        let mut pool = TransactionPool::new();
        pool.enqueue(Transaction::new("first", "r", 1, 4));
        pool.enqueue(Transaction::new("high", "r", 1, 9));
        pool.enqueue(Transaction::new("second", "r", 1, 4));
        pool.enqueue(Transaction::new("third", "r", 1, 4));

        assert_eq!(senders(&mut pool), vec!["high", "third", "second", "first"]);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_equal_fee_head_keeps_its_place() {
        let mut pool = TransactionPool::new();
        pool.enqueue(Transaction::new("a", "r", 1, 4));
        pool.enqueue(Transaction::new("b", "r", 1, 4));
        pool.enqueue(Transaction::new("c", "r", 1, 4));
        pool.enqueue(Transaction::new("low", "r", 1, 2));
        pool.enqueue(Transaction::new("d", "r", 1, 2));

        assert_eq!(senders(&mut pool), vec!["a", "c", "b", "d", "low"]);
    }

    #[test]
    fn test_dequeue_on_empty_pool() {
        let mut pool = TransactionPool::new();
        assert!(pool.dequeue().is_none());
        assert!(pool.peek().is_none());
        assert_eq!(
            pool.remove(0),
            Err(BlockchainError::EmptyContainer("transaction pool"))
        );
        assert_eq!(
            pool.get(0),
            Err(BlockchainError::EmptyContainer("transaction pool"))
        );
    }

    #[test]
    fn test_indexed_access_and_removal() {
        let mut pool: TransactionPool = [2, 8, 5]
            .into_iter()
            .map(|fee| Transaction::new("s", "r", 1, fee))
            .collect();

        assert_eq!(pool.get(1).map(Transaction::get_fee), Ok(5));
        assert_eq!(
            pool.get(3),
            Err(BlockchainError::IndexOutOfBounds { index: 3, len: 3 })
        );

        let removed = pool.remove(1).unwrap();
        assert_eq!(removed.get_fee(), 5);
        assert_eq!(fees(&pool), vec![8, 2]);
        assert_eq!(pool.len(), 2);
    }
}
