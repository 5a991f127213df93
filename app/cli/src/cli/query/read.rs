use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum Entity {
    Listing,
    Checkpoint,
}
