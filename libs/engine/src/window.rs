use alloy::primitives::BlockNumber;

/// Inclusive block range fetched by one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub from: BlockNumber,
    pub to: BlockNumber,
}

impl Window {
    /// Next range to fetch, bounded by `max_window` and by the chain head.
    /// `None` when the head has nothing new: the cycle short-circuits
    /// without touching the node or the stores.
    pub fn plan(
        last_synced: BlockNumber,
        chain_head: BlockNumber,
        max_window: u64,
    ) -> Option<Window> {
        let from = last_synced + 1;
        if from > chain_head {
            return None;
        }
        let to = from.saturating_add(max_window.saturating_sub(1)).min(chain_head);
        Some(Window { from, to })
    }

    pub fn span(&self) -> u64 {
        self.to - self.from
    }
}
