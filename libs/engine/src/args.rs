use std::time::Duration;

use alloy::primitives::BlockNumber;

#[derive(Debug, Clone)]
pub struct Args {
    /// Block the very first cycle checkpoints at when the store is empty.
    pub genesis_block: BlockNumber,
    /// Upper bound on the number of blocks fetched per cycle.
    pub max_window: u64,
    /// An empty window narrower than this does not produce a checkpoint,
    /// so quiet periods do not grow the checkpoint log once per tick.
    pub quiet_gap: u64,
    /// Fixed interval between cycle attempts.
    pub tick_interval: Duration,
}
