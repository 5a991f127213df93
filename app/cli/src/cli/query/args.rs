use clap::Parser;

use crate::cli::query::read::Entity;

#[derive(Parser, Debug)]
#[command(about = "Select indexed results", long_about = None)]
pub struct Query {
    /// SQLite connection string
    #[arg(short, long)]
    pub db_url: String,

    /// Entity to query
    #[arg(short, long, value_enum)]
    pub entity: Entity,

    /// Token id to look up (listings only; all listings when omitted)
    #[arg(long)]
    pub token_id: Option<u64>,
}
