use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::syncer::Syncer;

/// Drives the syncer on a fixed interval until shutdown. Ticks are not
/// buffered: a slow cycle makes the next attempt(s) no-ops, it never
/// queues them.
pub struct Runner {
    shutdown_tx: broadcast::Sender<()>,
    handle: JoinHandle<()>,
}

impl Runner {
    pub fn start(syncer: Arc<Syncer>) -> Runner {
        let (shutdown_tx, mut shutdown_rx) = broadcast::channel::<()>(1);

        let tick_interval = syncer.tick_interval();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(tick_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        syncer.tick().await;
                    }
                    _ = shutdown_rx.recv() => {
                        break;
                    }
                }
            }
        });

        Self { shutdown_tx, handle }
    }

    // Send shutdown signal and wait for the sync task to finish
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        let _ = self.handle.await;
    }
}
