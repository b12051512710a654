//! # Utility Functions
//!
//! Factory helpers for constructing event managers. Most hosts want a shared
//! `Arc<EventManager>` they can clone into producers and the dispatch loop;
//! these functions build one in a single call.

use crate::config::EventManagerConfig;
use crate::system::EventManager;
use std::sync::Arc;

/// Creates a new event manager instance with default configuration.
///
/// The returned manager is fully initialized and ready to accept handler
/// registrations and raised events. It can be safely shared across tasks.
pub fn create_event_manager() -> Arc<EventManager> {
    Arc::new(EventManager::new())
}

/// Creates a new event manager instance with the given configuration.
pub fn create_event_manager_with_config(config: EventManagerConfig) -> Arc<EventManager> {
    Arc::new(EventManager::with_config(config))
}
