use std::sync::atomic::{AtomicU64, Ordering};

/// Number of bone meal uses that were denied since the plugin was created.
#[derive(Debug, Default)]
pub struct BlockedCounter {
    blocked: AtomicU64,
}

impl BlockedCounter {
    pub const fn new() -> Self {
        Self {
            blocked: AtomicU64::new(0),
        }
    }

    /// Records one blocked attempt and returns the new total.
    pub fn increment(&self) -> u64 {
        self.blocked.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn get(&self) -> u64 {
        self.blocked.load(Ordering::Relaxed)
    }
}
