//! Console and JSON rendering of blocks, trees and proofs

use crate::core::{
    verify_transaction, Block, MerkleProof, MerkleTree, Transaction, TraversalOrder,
};
use serde::Serialize;
use std::fmt::{self, Write as _};

/// Everything the `run` command prints for one block
#[derive(Debug, Clone, Serialize)]
pub struct BlockReport {
    pub number: usize,
    pub transactions: Vec<String>,
    pub total_fees: u64,
    pub root_hash: Option<String>,
    pub height: usize,
    pub inner_nodes: usize,
    pub in_order: Vec<String>,
    pub pre_order: Vec<String>,
    pub post_order: Vec<String>,
    pub breadth_first: Vec<String>,
    pub lookup: LookupReport,
}

/// Proof for a lookup transaction and the outcome for it and a tampered copy
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    pub transaction: String,
    pub proof: MerkleProof,
    pub verified: bool,
    pub tampered_transaction: String,
    pub tampered_verified: bool,
}

/// One line of the `blocks` command
#[derive(Debug, Clone, Serialize)]
pub struct BlockSummary {
    pub number: usize,
    pub transactions: usize,
    pub total_fees: u64,
    pub root_hash: Option<String>,
}

/// Result of the `prove` command for one block
#[derive(Debug, Clone, Serialize)]
pub struct ProofReport {
    pub number: usize,
    pub contains: bool,
    pub proof: MerkleProof,
    pub verified: bool,
}

/// Same record with the fee bumped by one, so it is never the original leaf
pub fn tampered(transaction: &Transaction) -> Transaction {
    Transaction::new(
        transaction.get_sender(),
        transaction.get_receiver(),
        transaction.get_amount(),
        transaction.get_fee().wrapping_add(1),
    )
}

impl LookupReport {
    pub fn build(transaction: &Transaction, tree: &MerkleTree, root_hash: Option<&str>) -> Self {
        let proof = tree.extract_proof(transaction);
        let fake = tampered(transaction);
        LookupReport {
            transaction: transaction.to_string(),
            verified: verify_transaction(transaction, &proof, root_hash),
            tampered_verified: verify_transaction(&fake, &proof, root_hash),
            tampered_transaction: fake.to_string(),
            proof,
        }
    }
}

impl BlockReport {
    /// `number` is 1-based; `lookup` defaults to the block's first transaction
    pub fn build(
        number: usize,
        block: &Block,
        tree: &MerkleTree,
        lookup: Option<&Transaction>,
    ) -> Option<Self> {
        let lookup = lookup.or_else(|| block.get_transactions().first())?;
        Some(BlockReport {
            number,
            transactions: block.iter().map(Transaction::to_string).collect(),
            total_fees: block.total_fees(),
            root_hash: block.get_root_hash().map(str::to_string),
            height: tree.height(),
            inner_nodes: tree.inner_nodes(),
            in_order: tree.depth_first_traversal(TraversalOrder::InOrder),
            pre_order: tree.depth_first_traversal(TraversalOrder::PreOrder),
            post_order: tree.depth_first_traversal(TraversalOrder::PostOrder),
            breadth_first: tree.breadth_first_traversal(),
            lookup: LookupReport::build(lookup, tree, block.get_root_hash()),
        })
    }
}

impl BlockSummary {
    pub fn build(number: usize, block: &Block) -> Self {
        BlockSummary {
            number,
            transactions: block.num_of_transactions(),
            total_fees: block.total_fees(),
            root_hash: block.get_root_hash().map(str::to_string),
        }
    }
}

impl ProofReport {
    pub fn build(
        number: usize,
        block: &Block,
        tree: &MerkleTree,
        transaction: &Transaction,
    ) -> Self {
        let proof = tree.extract_proof(transaction);
        ProofReport {
            number,
            contains: block.contains(transaction),
            verified: verify_transaction(transaction, &proof, block.get_root_hash()),
            proof,
        }
    }
}

fn write_section<'a, I>(out: &mut String, title: &str, lines: I) -> fmt::Result
where
    I: IntoIterator<Item = &'a String>,
{
    writeln!(out, "\n{title}")?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

impl fmt::Display for BlockReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        writeln!(out, "\nBlock {}:", self.number)?;
        for tx in &self.transactions {
            writeln!(out, "{tx}")?;
        }

        writeln!(out, "\nMerkle Tree:")?;
        writeln!(out, "\nHeight: {}", self.height)?;
        writeln!(out, "InnerNodes: {}", self.inner_nodes)?;
        writeln!(
            out,
            "Root Hash Code: {}",
            self.root_hash.as_deref().unwrap_or("<none>")
        )?;

        write_section(&mut out, "In-order traversal of Merkle tree", &self.in_order)?;
        write_section(&mut out, "Pre-order traversal of Merkle tree", &self.pre_order)?;
        write_section(&mut out, "Post-order traversal of Merkle tree", &self.post_order)?;
        write_section(&mut out, "Breadth-first traversal of Merkle tree", &self.breadth_first)?;

        let lookup = &self.lookup;
        writeln!(out, "\nExisting transaction for lookup: {}", lookup.transaction)?;
        writeln!(
            out,
            "Non-existing transaction for lookup: {}",
            lookup.tampered_transaction
        )?;
        write_section(
            &mut out,
            "Extracted proof of the existing transaction:",
            lookup.proof.iter(),
        )?;
        writeln!(
            out,
            "\nVerification of the existing transaction: {}",
            lookup.verified
        )?;
        write!(
            out,
            "Verification of the non-existing transaction: {}",
            lookup.tampered_verified
        )?;

        f.write_str(&out)
    }
}

impl fmt::Display for BlockSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Block {}: {} transactions, fees {}, root {}",
            self.number,
            self.transactions,
            self.total_fees,
            self.root_hash.as_deref().unwrap_or("<none>")
        )
    }
}

impl fmt::Display for ProofReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Block {}: contains = {}", self.number, self.contains)?;
        for sibling in &self.proof {
            writeln!(f, "  {sibling}")?;
        }
        write!(f, "  verified = {}", self.verified)
    }
}
