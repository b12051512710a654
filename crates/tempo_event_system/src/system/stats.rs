/// Statistics tracking for the event manager
use serde::{Deserialize, Serialize};

/// Event manager counters for monitoring dispatch activity.
///
/// Snapshots are taken with
/// [`EventManager::get_stats`](super::EventManager::get_stats); all counters
/// are monotone over the manager's lifetime.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct EventManagerStats {
    /// Total number of currently registered handlers (per-type and catch-all)
    pub total_handlers: usize,
    /// Total number of events raised (deferred and immediate)
    pub events_raised: u64,
    /// Total number of events fully dispatched to their handlers
    pub events_dispatched: u64,
    /// Total number of events returned to the pool
    pub events_recycled: u64,
    /// Number of completed tick cycles
    pub ticks: u64,
}
