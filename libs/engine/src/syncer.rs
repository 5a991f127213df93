use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use store::checkpoint::store::Store as CheckpointStore;

use crate::args::Args;
use crate::error::SyncError;
use crate::event::{MarketEvent, MarketEventKind};
use crate::reader::ChainReader;
use crate::sink::handle::Sink;
use crate::window::Window;

/// What one cycle attempt did, for the runner's logs and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Another cycle was still running; this attempt was dropped.
    Skipped,
    /// First run ever: checkpointed the configured genesis block.
    Bootstrapped { genesis_block: u64 },
    /// Already caught up with the chain head.
    NoWork { chain_head: u64 },
    Synced { window: Window, fetched: usize, applied: usize, failed: usize, checkpointed: bool },
}

/// Mutual-exclusion flag over one synchronization cycle. Acquisition is a
/// single compare-exchange, release happens on drop, so the flag cannot
/// stick across any exit path of the cycle.
struct RunGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> RunGuard<'a> {
    fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Owns the synchronization cycle: checkpoint lookup, window planning,
/// per-kind fetch, chain-ordered application, checkpoint advancement.
pub struct Syncer {
    reader: Arc<dyn ChainReader>,
    sink: Arc<dyn Sink<Item = MarketEvent>>,
    checkpoints: CheckpointStore,
    args: Args,
    running: AtomicBool,
}

impl Syncer {
    pub fn new(
        reader: Arc<dyn ChainReader>,
        sink: Arc<dyn Sink<Item = MarketEvent>>,
        checkpoints: CheckpointStore,
        args: Args,
    ) -> Self {
        Self { reader, sink, checkpoints, args, running: AtomicBool::new(false) }
    }

    /// One cycle attempt. Errors escaping this function leave the
    /// checkpoint untouched, so the next tick retries the same window.
    pub async fn run_cycle(&self) -> Result<CycleOutcome, SyncError> {
        let Some(_guard) = RunGuard::try_acquire(&self.running) else {
            return Ok(CycleOutcome::Skipped);
        };

        let last_synced = match self.checkpoints.get_last_checkpoint().await? {
            Some(checkpoint) => checkpoint.last_block_number as u64,
            None => {
                // First run: record the genesis block and stop. The next
                // cycle starts fetching from genesis + 1.
                let genesis_block = self.args.genesis_block;
                self.checkpoints.insert_checkpoint(genesis_block).await?;
                tracing::info!("Bootstrapped checkpoint at genesis block {genesis_block}");
                return Ok(CycleOutcome::Bootstrapped { genesis_block });
            }
        };

        let chain_head = self.reader.latest_block_number().await?;

        let Some(window) = Window::plan(last_synced, chain_head, self.args.max_window) else {
            return Ok(CycleOutcome::NoWork { chain_head });
        };

        let (fetched, events) = self.fetch_window(window).await?;

        // Merge restores chain order across the per-kind fetches, so a
        // token listed then bought within one window applies list-then-buy.
        let mut events = events;
        events.sort_by_key(|e| e.position);

        let mut applied = 0;
        let mut failed = 0;
        for event in &events {
            match self.sink.apply(event).await {
                Ok(_) => applied += 1,
                Err(e) => {
                    // One bad record must not block unrelated assets.
                    failed += 1;
                    tracing::error!(
                        "Apply failed: kind={:?} token_id={} error={e:?}",
                        event.kind(),
                        event.token_id_pretty(),
                    );
                }
            }
        }

        // Empty narrow windows leave no checkpoint behind; anything that
        // carried events, or drifted past the quiet gap, advances it.
        let checkpointed = fetched > 0 || window.span() > self.args.quiet_gap;
        if checkpointed {
            self.checkpoints.insert_checkpoint(window.to).await?;
        }

        Ok(CycleOutcome::Synced { window, fetched, applied, failed, checkpointed })
    }

    async fn fetch_window(&self, window: Window) -> Result<(usize, Vec<MarketEvent>), SyncError> {
        let mut fetched = 0;
        let mut events = Vec::new();
        for kind in MarketEventKind::ALL {
            let logs = self.reader.market_events(kind, window).await?;
            tracing::info!(
                "Fetched {} {kind:?} logs in [{}, {}]",
                logs.len(),
                window.from,
                window.to
            );
            fetched += logs.len();
            for log in &logs {
                match MarketEvent::decode(kind, log) {
                    Ok(event) => events.push(event),
                    Err(e) => {
                        tracing::error!("Skip: failed to decode {kind:?} log: {log:?} - reason {e:?}");
                    }
                }
            }
        }
        Ok((fetched, events))
    }

    pub fn tick_interval(&self) -> std::time::Duration {
        self.args.tick_interval
    }

    /// Cycle boundary: every failure class degrades to a logged retry.
    pub async fn tick(&self) {
        match self.run_cycle().await {
            Ok(CycleOutcome::Skipped) => {
                tracing::info!("Cycle skipped: previous cycle still running");
            }
            Ok(outcome) => {
                tracing::info!("Cycle finished: {outcome:?}");
            }
            Err(e) => {
                tracing::error!("Cycle failed: {e:?}");
            }
        }
    }
}
