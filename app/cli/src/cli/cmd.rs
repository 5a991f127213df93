use clap::command;
use clap::{Parser, Subcommand};

use crate::cli::query::args::Query;

use super::sync::args::Args;

#[derive(Parser, Debug)]
#[command(name = "market-indexer")]
#[command(about = "CLI tool for the NFT marketplace indexer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the marketplace synchronizer
    Sync(Args),
    Select(Query),
}
