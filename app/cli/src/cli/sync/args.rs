use clap::Parser;
use clap::{arg, command};

#[derive(Parser, Debug)]
#[command(about = "Start the marketplace synchronizer", long_about = None)]
pub struct Args {
    /// Node Provider connection string
    #[arg(short, long)]
    pub rpc_url: String,

    /// SQLite connection string
    #[arg(short, long)]
    pub db_url: String,

    /// Marketplace contract address
    #[arg(short, long)]
    pub address: String,

    /// Block the first checkpoint is created at when none exists
    #[arg(long, default_value_t = 35774940)]
    pub genesis_block: u64,

    /// Maximum number of blocks fetched per cycle
    #[arg(long, default_value_t = 10000)]
    pub max_window: u64,

    /// Empty windows narrower than this do not advance the checkpoint
    #[arg(long, default_value_t = 5000)]
    pub quiet_gap: u64,

    /// Cycle interval in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub tick_interval: u64,
}
