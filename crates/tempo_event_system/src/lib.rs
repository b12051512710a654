//! # Tempo Event System
//!
//! A tick-driven, in-process event dispatch system with priority ordering and
//! pooled event recycling, designed for host loops that process events once
//! per frame or cycle.
//!
//! ## Core Features
//!
//! - **Typed Events**: String-tagged events with opaque positional parameters
//! - **Priority Dispatch**: Each tick's batch is delivered in ascending
//!   priority order
//! - **Deferred and Immediate Delivery**: Queue for the next cycle or notify
//!   interested handlers synchronously
//! - **Object Pooling**: Dispatched events are reset and recycled, keeping
//!   the steady state allocation-free
//! - **Async/Await Support**: Built on Tokio; handlers are async and the host
//!   loop simply awaits `tick()`
//! - **Catch-All Subscriptions**: Handlers can observe every event type in
//!   addition to per-type registrations
//!
//! ## Architecture Overview
//!
//! The system is organized around three components:
//!
//! - **[`Event`]** — the unit of communication: type tag, numeric priority,
//!   opaque parameter list. Comparable by priority alone.
//! - **[`Pool`]** — a generic recycler for types implementing the
//!   [`Poolable`] reset contract, with an optional cap on total constructed
//!   instances.
//! - **[`EventManager`]** — the coordinator owning the pool, the three event
//!   queues (new, current, notified) and the handler registry. `tick()` is
//!   the single place events move between queues and recycling happens.
//!
//! Each tick recycles the previous cycle's dispatched events, dispatches the
//! current batch by ascending priority, then promotes newly raised events
//! into the batch for the following tick.
//!
//! ## Quick Start Example
//!
//! ```rust,no_run
//! use tempo_event_system::{create_event_manager, Event, EventHandler, FnEventHandler};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let events = create_event_manager();
//!
//!     // Register event handlers
//!     let handler: Arc<dyn EventHandler> =
//!         Arc::new(FnEventHandler::new("damage_logger", |event: &Event| {
//!             println!("damage event: {:?}", event.params());
//!             Ok(())
//!         }));
//!     events.register("entity_damaged", handler).await;
//!
//!     // Raise a prioritized event for the next cycle
//!     let event = events
//!         .new_event_with_params("entity_damaged", [json!({"entity": 7, "amount": 12.5})])
//!         .with_priority(2);
//!     events.raise(event).await;
//!
//!     // Run the main host loop
//!     loop {
//!         events.tick().await?;
//!         tokio::time::sleep(tokio::time::Duration::from_millis(16)).await; // ~60 FPS
//!     }
//! }
//! ```

// Core modules
pub mod config;
pub mod events;
pub mod pool;
pub mod system;
pub mod utils;

// Re-export commonly used items for convenience
pub use config::{DispatchErrorPolicy, EventManagerConfig};
pub use events::{Event, EventError, EventHandler, EventParams, FnEventHandler};
pub use pool::{Pool, Poolable};
pub use system::{EventManager, EventManagerStats};
pub use utils::{create_event_manager, create_event_manager_with_config};

// External dependencies that host applications commonly need
pub use async_trait::async_trait;
pub use futures;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
