use crate::core::{verify_transaction, Block, MerkleProof, Transaction};
use crate::error::{BlockchainError, Result};
use crate::utils::{combine, digest, DUMMY_PREIMAGE};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Depth-first walk orders supported by [`MerkleTree::depth_first_traversal`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraversalOrder {
    PreOrder,
    InOrder,
    PostOrder,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalOrder::PreOrder => write!(f, "pre-order"),
            TraversalOrder::InOrder => write!(f, "in-order"),
            TraversalOrder::PostOrder => write!(f, "post-order"),
        }
    }
}

impl FromStr for TraversalOrder {
    type Err = BlockchainError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "preorder" | "pre" => Ok(TraversalOrder::PreOrder),
            "inorder" | "in" => Ok(TraversalOrder::InOrder),
            "postorder" | "post" => Ok(TraversalOrder::PostOrder),
            _ => Err(BlockchainError::Config(format!(
                "Invalid traversal order: {s}. Valid options: pre-order, in-order, post-order"
            ))),
        }
    }
}

/// Merkle tree over the transactions of a single block
///
/// Leaves are padded with `digest("DUMMY")` up to the next power of two, so
/// the tree is always perfect: `leaf_count == 2^height` and
/// `inner_nodes == leaf_count - 1`. Parents hash with [`combine`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MerkleTree {
    root: Option<Box<MerkleNode>>,
    height: usize,
    inner_nodes: usize,
    leaf_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MerkleNode {
    hash: String,
    left: Option<Box<MerkleNode>>,
    right: Option<Box<MerkleNode>>,
}

impl MerkleNode {
    fn leaf(hash: String) -> MerkleNode {
        MerkleNode {
            hash,
            left: None,
            right: None,
        }
    }

    fn parent(left: MerkleNode, right: MerkleNode) -> MerkleNode {
        MerkleNode {
            hash: combine(&left.hash, &right.hash),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl MerkleTree {
    /// Build the tree for `block` and store the resulting root hash on it.
    ///
    /// An empty block yields an empty tree and its root hash stays unset.
    pub fn new(block: &mut Block) -> MerkleTree {
        let tree = Self::from_transactions(block.get_transactions());
        if let Some(root_hash) = tree.root_hash() {
            block.set_root_hash(root_hash.to_string());
        }
        tree
    }

    /// Build a tree over `transactions` in the given order without touching any block
    pub fn from_transactions(transactions: &[Transaction]) -> MerkleTree {
        if transactions.is_empty() {
            return MerkleTree::default();
        }

        let mut nodes: VecDeque<MerkleNode> = transactions
            .iter()
            .map(|tx| MerkleNode::leaf(tx.leaf_hash()))
            .collect();

        let leaf_count = nodes.len().next_power_of_two();
        let padding = leaf_count - nodes.len();
        if padding > 0 {
            let dummy = digest(DUMMY_PREIMAGE);
            nodes.extend((0..padding).map(|_| MerkleNode::leaf(dummy.clone())));
        }

        // Pair from the front and append parents to the back; with a power of
        // two leaves this consumes the tree one full level at a time.
        let mut inner_nodes = 0;
        while nodes.len() > 1 {
            if let (Some(left), Some(right)) = (nodes.pop_front(), nodes.pop_front()) {
                nodes.push_back(MerkleNode::parent(left, right));
                inner_nodes += 1;
            }
        }

        let height = leaf_count.trailing_zeros() as usize;
        debug!(
            "Built Merkle tree over {} transactions: {leaf_count} leaves ({padding} padding), height {height}, {inner_nodes} inner nodes",
            transactions.len()
        );

        MerkleTree {
            root: nodes.pop_front().map(Box::new),
            height,
            inner_nodes,
            leaf_count,
        }
    }

    pub fn root_hash(&self) -> Option<&str> {
        self.root.as_ref().map(|node| node.hash.as_str())
    }

    /// Number of pairing levels between the leaves and the root
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn inner_nodes(&self) -> usize {
        self.inner_nodes
    }

    /// Leaf count after padding
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Node hashes in the requested depth-first order
    pub fn depth_first_traversal(&self, order: TraversalOrder) -> Vec<String> {
        let mut hashes = Vec::with_capacity(self.node_count());
        if let Some(root) = self.root.as_deref() {
            Self::walk(root, order, &mut hashes);
        }
        hashes
    }

    fn walk(node: &MerkleNode, order: TraversalOrder, hashes: &mut Vec<String>) {
        let left = node.left.as_deref();
        let right = node.right.as_deref();

        match order {
            TraversalOrder::PreOrder => {
                hashes.push(node.hash.clone());
                Self::walk_opt(left, order, hashes);
                Self::walk_opt(right, order, hashes);
            }
            TraversalOrder::InOrder => {
                Self::walk_opt(left, order, hashes);
                hashes.push(node.hash.clone());
                Self::walk_opt(right, order, hashes);
            }
            TraversalOrder::PostOrder => {
                Self::walk_opt(left, order, hashes);
                Self::walk_opt(right, order, hashes);
                hashes.push(node.hash.clone());
            }
        }
    }

    fn walk_opt(node: Option<&MerkleNode>, order: TraversalOrder, hashes: &mut Vec<String>) {
        if let Some(node) = node {
            Self::walk(node, order, hashes);
        }
    }

    /// Node hashes level by level, left to right within a level
    pub fn breadth_first_traversal(&self) -> Vec<String> {
        let mut hashes = Vec::with_capacity(self.node_count());
        let mut queue: VecDeque<&MerkleNode> = self.root.as_deref().into_iter().collect();

        while let Some(node) = queue.pop_front() {
            hashes.push(node.hash.clone());
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
        }

        hashes
    }

    /// Sibling hashes from the transaction's leaf up to the root.
    ///
    /// Returns an empty proof when the transaction is not a leaf of this tree.
    pub fn extract_proof(&self, transaction: &Transaction) -> MerkleProof {
        let leaf_hash = transaction.leaf_hash();
        self.root
            .as_deref()
            .and_then(|root| Self::find_proof(root, &leaf_hash))
            .map(MerkleProof::new)
            .unwrap_or_default()
    }

    fn find_proof(node: &MerkleNode, leaf_hash: &str) -> Option<Vec<String>> {
        let (left, right) = match (node.left.as_deref(), node.right.as_deref()) {
            (Some(left), Some(right)) => (left, right),
            _ => return None,
        };

        if left.is_leaf() && left.hash == leaf_hash {
            return Some(vec![right.hash.clone()]);
        }
        if right.is_leaf() && right.hash == leaf_hash {
            return Some(vec![left.hash.clone()]);
        }

        if let Some(mut proof) = Self::find_proof(left, leaf_hash) {
            proof.push(right.hash.clone());
            return Some(proof);
        }
        if let Some(mut proof) = Self::find_proof(right, leaf_hash) {
            proof.push(left.hash.clone());
            return Some(proof);
        }

        None
    }

    /// Extract and verify a proof for `transaction` against this tree's root
    pub fn proves(&self, transaction: &Transaction) -> bool {
        let proof = self.extract_proof(transaction);
        verify_transaction(transaction, &proof, self.root_hash())
    }

    fn node_count(&self) -> usize {
        self.leaf_count + self.inner_nodes
    }
}
