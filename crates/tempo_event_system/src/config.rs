//! Event manager configuration.

use serde::{Deserialize, Serialize};

/// Policy applied when a handler returns an error during dispatch.
///
/// Dispatch failure handling is an explicit configuration choice, not an
/// accident of control flow: hosts that treat handler failures as fatal can
/// propagate, everyone else keeps the tick running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchErrorPolicy {
    /// Log the failure and keep notifying remaining handlers and events.
    /// The failing event is still recycled normally.
    LogAndContinue,
    /// Return the first handler error from `tick`/`raise_immediate`,
    /// abandoning the remainder of the dispatch phase. Events not yet
    /// dispatched stay queued for the next tick.
    Propagate,
}

impl Default for DispatchErrorPolicy {
    fn default() -> Self {
        DispatchErrorPolicy::LogAndContinue
    }
}

/// Configuration for an [`EventManager`](crate::EventManager).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventManagerConfig {
    /// How handler errors during dispatch are surfaced
    pub error_policy: DispatchErrorPolicy,
}

impl Default for EventManagerConfig {
    fn default() -> Self {
        Self {
            error_policy: DispatchErrorPolicy::LogAndContinue,
        }
    }
}
