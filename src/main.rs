// This is the entry point for the merkle chain CLI
// It loads a transaction file, batches it into blocks and reports on each block's Merkle tree
use clap::Parser;
use log::{error, info, LevelFilter};
use merkle_chain::cli::report::{BlockReport, BlockSummary, ProofReport};
use merkle_chain::cli::{Command, InputArgs, WalkArg};
use merkle_chain::{load_transactions, Blockchain, MerkleTree, Opt, Result, GLOBAL_CONFIG};
use serde::Serialize;
use std::process;
use std::str::FromStr;

fn main() {
    let opt = Opt::parse();

    // I load the config file before logging starts so it can pick the log level
    let config_result = match &opt.config {
        Some(path) => GLOBAL_CONFIG.load_file(path),
        None => Ok(()),
    };

    let level = GLOBAL_CONFIG
        .get_log_level()
        .and_then(|level| LevelFilter::from_str(&level).ok())
        .unwrap_or(LevelFilter::Info);
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = config_result.and_then(|_| run_command(opt.command)) {
        error!("Error: {e}");
        process::exit(1);
    }
}

// Shared front half of every command: load, batch, build the trees
fn build_chain(input: &InputArgs) -> Result<(Blockchain, Vec<MerkleTree>)> {
    let threshold = GLOBAL_CONFIG.fee_threshold_or_default()?;

    let mut pool = load_transactions(&input.file)?;
    if !input.json {
        println!("\nContents of the priority queue:");
        for tx in &pool {
            println!("{tx}");
        }
    }

    let mut chain = Blockchain::new(&mut pool, threshold);
    let trees = chain.build_merkle_trees();
    info!("Built {} Merkle trees", trees.len());
    Ok((chain, trees))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_command(command: Command) -> Result<()> {
    let json = command.input().json;
    let lookup = match &command {
        Command::Run { lookup, .. } => lookup.as_ref(),
        _ => None,
    };
    GLOBAL_CONFIG.apply_overrides(command.input().threshold, lookup);
    let (chain, trees) = build_chain(command.input())?;
    let numbered = chain.iter().zip(&trees).enumerate().map(|(i, (b, t))| (i + 1, b, t));

    match command {
        // The full walkthrough: every traversal plus a proof for the lookup transaction
        Command::Run { .. } => {
            let lookup = GLOBAL_CONFIG.get_lookup_transaction()?;
            let reports: Vec<BlockReport> = numbered
                .filter_map(|(n, block, tree)| BlockReport::build(n, block, tree, lookup.as_ref()))
                .collect();

            if json {
                print_json(&reports)?;
            } else {
                for report in &reports {
                    println!("{report}");
                }
            }
        }
        Command::Blocks { .. } => {
            let summaries: Vec<BlockSummary> = numbered
                .map(|(n, block, _)| BlockSummary::build(n, block))
                .collect();

            if json {
                print_json(&summaries)?;
            } else {
                println!();
                for summary in &summaries {
                    println!("{summary}");
                }
            }
        }
        Command::Prove { transaction, .. } => {
            let reports: Vec<ProofReport> = numbered
                .map(|(n, block, tree)| ProofReport::build(n, block, tree, &transaction))
                .collect();

            if json {
                print_json(&reports)?;
            } else {
                println!("\nProving: {transaction}");
                for report in &reports {
                    println!("{report}");
                }
            }
        }
        Command::Traverse { order, .. } => {
            let walks: Vec<Vec<String>> = trees
                .iter()
                .map(|tree| match order {
                    WalkArg::DepthFirst(order) => tree.depth_first_traversal(order),
                    WalkArg::BreadthFirst => tree.breadth_first_traversal(),
                })
                .collect();

            if json {
                print_json(&walks)?;
            } else {
                for (i, walk) in walks.iter().enumerate() {
                    println!("\nBlock {} ({order}):", i + 1);
                    for hash in walk {
                        println!("{hash}");
                    }
                }
            }
        }
    }
    Ok(())
}
