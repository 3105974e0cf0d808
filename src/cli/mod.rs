//! Command-line interface
//!
//! This module contains the CLI commands, argument parsing and the
//! report types printed by the merkle chain binary.

pub mod commands;
pub mod report;

pub use commands::{Command, InputArgs, Opt, WalkArg};
pub use report::{BlockReport, BlockSummary, LookupReport, ProofReport};
