mod cli {
    pub mod sync {
        pub mod args;
        pub mod run;
    }
    pub mod query {
        pub mod args;
        pub mod read;
        pub mod response;
        pub mod run;
    }
    pub mod cmd;
    pub mod read;
}

use clap::Parser;
use eyre::Result;

use crate::cli::cmd::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli);

    match &cli.command {
        Command::Sync(args) => {
            tracing::info!("Sync Command: {:?}", args);
            cli::sync::run::start(args).await
        }
        Command::Select(query) => {
            tracing::info!("Query: {:?}", query);
            cli::query::run::select(query).await
        }
    }
}

fn init_tracing(cli: &Cli) {
    match &cli.command {
        Command::Sync(_) => {
            // install global subscriber configured based on RUST_LOG envvar.
            tracing_subscriber::fmt::init();
        }
        Command::Select(_) => {
            tracing_subscriber::fmt::Subscriber::builder().with_writer(std::io::stderr).init();
        }
    }
}
