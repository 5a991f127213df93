use std::sync::Arc;
use std::time::Duration;

use alloy::transports::http::reqwest::Url;
use chain::rpc::NodeClient;
use engine::{
    reader::{ChainReader, MarketSource},
    runner::Runner,
    sink::{handle::Sink, listing::ListingSink},
    syncer::Syncer,
};
use eyre::Result;
use store::client::Client;

use crate::cli::read;
use crate::cli::sync::args::Args;

pub async fn start(args: &Args) -> Result<()> {
    let node_client = NodeClient::new(Url::parse(&args.rpc_url)?);
    let address = read::parse_address(&args.address)?;
    let reader: Arc<dyn ChainReader> = Arc::new(MarketSource { node_client, address });

    let client = Client::init(&args.db_url).await?;
    let checkpoint_store = store::checkpoint::store::Store::new(client.clone());
    let listing_store = store::listing::store::Store::new(client.clone());
    let sink: Arc<dyn Sink<Item = engine::event::MarketEvent>> =
        Arc::new(ListingSink { store: listing_store });

    let sync_args = engine::args::Args {
        genesis_block: args.genesis_block,
        max_window: args.max_window,
        quiet_gap: args.quiet_gap,
        tick_interval: Duration::from_millis(args.tick_interval),
    };

    tracing::info!("Starting the synchronizer {sync_args:?}");

    let syncer = Arc::new(Syncer::new(reader, sink, checkpoint_store, sync_args));
    let runner = Runner::start(syncer);

    // Wait for user to request shutdown (SIGINT)
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down synchronizer...");

    // Gracefully shutdown
    runner.shutdown().await;

    Ok(())
}
