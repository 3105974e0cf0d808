use crate::core::{Transaction, TraversalOrder};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// Which walk the `traverse` command prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkArg {
    DepthFirst(TraversalOrder),
    BreadthFirst,
}

impl FromStr for WalkArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "breadthfirst" | "bfs" | "levelorder" => Ok(WalkArg::BreadthFirst),
            _ => TraversalOrder::from_str(s)
                .map(WalkArg::DepthFirst)
                .map_err(|_| {
                    format!(
                        "Invalid order: {s}. Valid options: pre-order, in-order, post-order, breadth-first"
                    )
                }),
        }
    }
}

impl std::fmt::Display for WalkArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalkArg::DepthFirst(order) => write!(f, "{order}"),
            WalkArg::BreadthFirst => write!(f, "breadth-first"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "merkle-chain")]
pub struct Opt {
    #[arg(long = "config", global = true, help = "TOML file with default settings")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

/// Input shared by every command: a transaction file and an optional threshold
#[derive(Debug, Args)]
pub struct InputArgs {
    #[arg(help = "File with one 'sender receiver amount fee' record per line")]
    pub file: PathBuf,
    #[arg(
        help = "Cumulative fee threshold for sealing a block",
        allow_negative_numbers = true
    )]
    pub threshold: Option<i64>,
    #[arg(long = "json", help = "Print machine-readable JSON instead of text")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        name = "run",
        about = "Batch transactions, build every Merkle tree and prove a lookup transaction"
    )]
    Run {
        #[command(flatten)]
        input: InputArgs,
        #[arg(
            long = "lookup",
            help = "Transaction to prove in each block, e.g. \"sender8 receiver8 12305 4\""
        )]
        lookup: Option<Transaction>,
    },
    #[command(name = "blocks", about = "Show how transactions are batched into blocks")]
    Blocks {
        #[command(flatten)]
        input: InputArgs,
    },
    #[command(name = "prove", about = "Extract and verify an inclusion proof in every block")]
    Prove {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long = "transaction", help = "Transaction as \"sender receiver amount fee\"")]
        transaction: Transaction,
    },
    #[command(name = "traverse", about = "Print one traversal of every block's Merkle tree")]
    Traverse {
        #[command(flatten)]
        input: InputArgs,
        #[arg(
            long = "order",
            default_value = "in-order",
            help = "pre-order, in-order, post-order or breadth-first"
        )]
        order: WalkArg,
    },
}

impl Command {
    pub fn input(&self) -> &InputArgs {
        match self {
            Command::Run { input, .. }
            | Command::Blocks { input }
            | Command::Prove { input, .. }
            | Command::Traverse { input, .. } => input,
        }
    }
}
