/// Core EventManager implementation
use super::stats::EventManagerStats;
use crate::config::EventManagerConfig;
use crate::events::{Event, EventHandler};
use crate::pool::Pool;
use compact_str::CompactString;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// The central coordinator for event queueing and dispatch.
///
/// Producers obtain pooled [`Event`] instances from the manager, raise them
/// (deferred or immediate), and the host loop drives delivery by awaiting
/// [`tick`](EventManager::tick) once per cycle. Handlers are registered per
/// event type or as catch-all observers of every type.
///
/// The manager is an explicitly constructed instance — create one, wrap it in
/// an `Arc`, and inject it wherever events are produced or consumed. There is
/// no hidden global.
///
/// Uses `DashMap` for lock-free concurrent access to the per-type handler
/// registry. The three event queues (new, current, notified) are mutex
/// guarded; an event lives in at most one of them at a time, and `tick` is
/// the only place events move between queues or back into the pool.
pub struct EventManager {
    /// Lock-free map of event types to their registered handlers
    pub(super) handlers: DashMap<CompactString, Vec<Arc<dyn EventHandler>>>,
    /// Handlers interested in every event type, independent of the map
    pub(super) catch_all: RwLock<Vec<Arc<dyn EventHandler>>>,
    /// Batch being dispatched this tick
    pub(super) events_current: Mutex<Vec<Event>>,
    /// Events raised since the last tick began
    pub(super) events_new: Mutex<Vec<Event>>,
    /// Events dispatched this tick, pending recycle on the next one
    pub(super) events_notified: Mutex<Vec<Event>>,
    /// Recycler backing `new_event`; constructs blank events on demand
    pub(super) event_pool: Pool<Event>,
    /// Activity counters for monitoring
    pub(super) stats: RwLock<EventManagerStats>,
    pub(super) config: EventManagerConfig,
}

impl std::fmt::Debug for EventManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventManager")
            .field("handlers", &"[handlers]")
            .field("event_pool", &self.event_pool)
            .field("config", &self.config)
            .finish()
    }
}

impl EventManager {
    /// Creates a new event manager with default configuration and no
    /// registered handlers.
    pub fn new() -> Self {
        Self::with_config(EventManagerConfig::default())
    }

    /// Creates a new event manager with the given configuration.
    pub fn with_config(config: EventManagerConfig) -> Self {
        Self {
            handlers: DashMap::new(),
            catch_all: RwLock::new(Vec::new()),
            events_current: Mutex::new(Vec::new()),
            events_new: Mutex::new(Vec::new()),
            events_notified: Mutex::new(Vec::new()),
            event_pool: Pool::new(Event::default),
            stats: RwLock::new(EventManagerStats::default()),
            config,
        }
    }

    /// The configuration this manager was constructed with.
    #[inline]
    pub fn config(&self) -> &EventManagerConfig {
        &self.config
    }

    /// Gets the current event manager statistics.
    #[inline]
    pub async fn get_stats(&self) -> EventManagerStats {
        self.stats.read().await.clone()
    }
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new()
    }
}
