use crate::core::Transaction;
use crate::utils::combine;
use log::debug;
use serde::{Deserialize, Serialize};

/// Inclusion proof: sibling hashes ordered from the leaf level up to the root
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MerkleProof {
    siblings: Vec<String>,
}

impl MerkleProof {
    pub fn new(siblings: Vec<String>) -> MerkleProof {
        MerkleProof { siblings }
    }

    pub fn siblings(&self) -> &[String] {
        self.siblings.as_slice()
    }

    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.siblings.iter()
    }

    /// Fold the transaction's leaf hash through every sibling
    pub fn compute_root(&self, transaction: &Transaction) -> String {
        self.siblings
            .iter()
            .fold(transaction.leaf_hash(), |running, sibling| {
                combine(&running, sibling)
            })
    }
}

impl From<Vec<String>> for MerkleProof {
    fn from(siblings: Vec<String>) -> Self {
        MerkleProof::new(siblings)
    }
}

impl<'a> IntoIterator for &'a MerkleProof {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Check that `transaction` is committed to by `root_hash` via `proof`.
///
/// Proofs are only accepted when their length is a power of two and at least
/// two, which rejects the single-sibling proofs of two-leaf trees as well as
/// proofs from trees of odd height. A mismatch or a rejected shape is `false`,
/// never an error.
pub fn verify_transaction(
    transaction: &Transaction,
    proof: &MerkleProof,
    root_hash: Option<&str>,
) -> bool {
    let root_hash = match root_hash {
        Some(hash) if !hash.is_empty() => hash,
        _ => return false,
    };

    let len = proof.len();
    if len < 2 || !len.is_power_of_two() {
        debug!("Rejecting proof with {len} siblings for {transaction}");
        return false;
    }

    proof.compute_root(transaction) == root_hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MerkleTree;
    use crate::testing::sample_transactions;
    use crate::utils::digest;

    fn txs(n: usize) -> Vec<Transaction> {
        sample_transactions(n)
    }

    #[test]
    fn test_verify_every_member_of_height_two_tree() {
        let txs = txs(3);
        let tree = MerkleTree::from_transactions(&txs);
        for tx in &txs {
            let proof = tree.extract_proof(tx);
            assert!(verify_transaction(tx, &proof, tree.root_hash()));
        }
    }

    #[test]
    fn test_verify_every_member_of_height_four_tree() {
        let txs = txs(13);
        let tree = MerkleTree::from_transactions(&txs);
        assert_eq!(tree.height(), 4);
        for tx in &txs {
            let proof = tree.extract_proof(tx);
            assert!(verify_transaction(tx, &proof, tree.root_hash()));
        }
    }

    #[test]
    fn test_tampered_transaction_fails() {
        let txs = txs(4);
        let tree = MerkleTree::from_transactions(&txs);
        let proof = tree.extract_proof(&txs[1]);

        let tampered = Transaction::new(
            txs[1].get_sender(),
            txs[1].get_receiver(),
            txs[1].get_amount(),
            txs[1].get_fee() + 1,
        );
        assert!(!verify_transaction(&tampered, &proof, tree.root_hash()));
    }

    #[test]
    fn test_empty_proof_or_root_fails() {
        let txs = txs(4);
        let tree = MerkleTree::from_transactions(&txs);
        let proof = tree.extract_proof(&txs[0]);

        assert!(!verify_transaction(&txs[0], &MerkleProof::default(), tree.root_hash()));
        assert!(!verify_transaction(&txs[0], &proof, None));
        assert!(!verify_transaction(&txs[0], &proof, Some("")));
    }

    #[test]
    fn test_wrong_root_fails() {
        let txs = txs(4);
        let tree = MerkleTree::from_transactions(&txs);
        let proof = tree.extract_proof(&txs[0]);
        let wrong_root = digest("wrong");
        assert!(!verify_transaction(&txs[0], &proof, Some(&wrong_root)));
    }

    #[test]
    fn test_shape_gate_rejects_valid_short_and_odd_proofs() {
        // Two leaves: the proof is genuine but only one sibling long
        let two = txs(2);
        let tree = MerkleTree::from_transactions(&two);
        let proof = tree.extract_proof(&two[0]);
        assert_eq!(proof.len(), 1);
        assert_eq!(proof.compute_root(&two[0]), tree.root_hash().unwrap());
        assert!(!verify_transaction(&two[0], &proof, tree.root_hash()));

        // Eight leaves: three siblings is not a power of two
        let eight = txs(8);
        let tree = MerkleTree::from_transactions(&eight);
        let proof = tree.extract_proof(&eight[5]);
        assert_eq!(proof.len(), 3);
        assert_eq!(proof.compute_root(&eight[5]), tree.root_hash().unwrap());
        assert!(!verify_transaction(&eight[5], &proof, tree.root_hash()));
    }

    #[test]
    fn test_proof_serializes_as_plain_list() {
        let proof = MerkleProof::from(vec!["aa".to_string(), "bb".to_string()]);
        let json = serde_json::to_string(&proof).unwrap();
        assert_eq!(json, r#"["aa","bb"]"#);
    }
}
