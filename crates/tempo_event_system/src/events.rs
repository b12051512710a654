//! # Event Type and Handler Traits
//!
//! This module defines the unit of communication for the Tempo event system —
//! the [`Event`] value — together with the handler abstraction the manager
//! dispatches to and the error taxonomy for dispatch operations.
//!
//! ## Events
//!
//! An event is a typed, prioritized message carrying an ordered list of opaque
//! parameters. Events are deliberately mutable: the manager's pool hands the
//! same instances out again and again, overwriting the type tag and parameter
//! list on each checkout.
//!
//! ## Ordering
//!
//! Events compare **solely by priority** (ascending). Two events with equal
//! priority are equal for ordering purposes regardless of their type or
//! parameters; their relative dispatch order within a tick is unspecified.

use crate::pool::Poolable;
use async_trait::async_trait;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Inline-optimized parameter storage. Most events carry at most a handful of
/// parameters, so the common case avoids a heap allocation entirely.
pub type EventParams = SmallVec<[serde_json::Value; 4]>;

/// A typed, prioritized message with opaque positional parameters.
///
/// Instances are produced by the manager's pool (see
/// [`EventManager::new_event`](crate::EventManager::new_event)), filled in by
/// the producer, queued or dispatched, and eventually reset and returned to
/// the pool. Handlers receive events by reference and must not assume access
/// beyond the handler call.
///
/// # Examples
///
/// ```rust
/// use tempo_event_system::Event;
/// use serde_json::json;
///
/// let event = Event::with_params("entity_damaged", [json!(7), json!(12.5)])
///     .with_priority(2);
/// assert_eq!(event.event_type(), "entity_damaged");
/// assert_eq!(event.priority(), 2);
/// assert_eq!(event.params().len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Event {
    /// Routing tag; empty for a reset, pooled instance
    event_type: CompactString,
    /// Dispatch priority, ascending (lower values dispatch first)
    priority: i32,
    /// Opaque positional parameters
    params: EventParams,
}

impl Event {
    /// Creates a blank-parameter event with priority 0.
    pub fn new(event_type: impl Into<CompactString>) -> Self {
        Self {
            event_type: event_type.into(),
            priority: 0,
            params: EventParams::new(),
        }
    }

    /// Creates an event carrying the given parameters, priority 0.
    pub fn with_params<I>(event_type: impl Into<CompactString>, params: I) -> Self
    where
        I: IntoIterator<Item = serde_json::Value>,
    {
        let mut event = Self::new(event_type);
        event.set_params(params);
        event
    }

    /// Sets the dispatch priority, builder style.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Appends a parameter, builder style.
    pub fn with_param(mut self, param: serde_json::Value) -> Self {
        self.params.push(param);
        self
    }

    /// The event's routing tag.
    #[inline]
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// The event's dispatch priority. Lower values dispatch first.
    #[inline]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The event's positional parameters.
    #[inline]
    pub fn params(&self) -> &[serde_json::Value] {
        &self.params
    }

    /// Overwrites the routing tag. Used by the manager when recycling a
    /// pooled instance for a new producer.
    pub fn set_event_type(&mut self, event_type: impl Into<CompactString>) {
        self.event_type = event_type.into();
    }

    /// Overwrites the dispatch priority.
    pub fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
    }

    /// Replaces the parameter list.
    pub fn set_params<I>(&mut self, params: I)
    where
        I: IntoIterator<Item = serde_json::Value>,
    {
        self.params.clear();
        self.params.extend(params);
    }

    /// Serializes any `Serialize` value and appends it as a parameter.
    pub fn push_param<T: Serialize>(&mut self, param: &T) -> Result<(), EventError> {
        self.params.push(serde_json::to_value(param)?);
        Ok(())
    }
}

impl Poolable for Event {
    fn reset(&mut self) {
        self.event_type.clear();
        self.priority = 0;
        self.params.clear();
    }
}

// Ordering is defined solely by priority. Equality follows ordering: events
// with the same priority compare equal even when their types and parameters
// differ.

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl Eq for Event {}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

/// Handler capability for processing dispatched events.
///
/// This trait abstracts over the event handling logic and provides a uniform
/// interface for the manager to call, whether the interest was registered for
/// a single event type or for every event.
///
/// The event reference is only valid for the duration of the call; the
/// instance is recycled once the dispatch cycle completes. Handlers that need
/// data past the call must copy it out.
#[async_trait]
pub trait EventHandler: Send + Sync + 'static + Debug {
    /// Handles a dispatched event.
    ///
    /// Returning an error surfaces through the manager's configured
    /// [`DispatchErrorPolicy`](crate::DispatchErrorPolicy).
    async fn on_event(&self, event: &Event) -> Result<(), EventError>;

    /// A human-readable name for this handler for diagnostics.
    fn handler_name(&self) -> &str;
}

/// Adapter that turns a plain closure into an [`EventHandler`].
///
/// # Examples
///
/// ```rust
/// use tempo_event_system::{Event, EventError, FnEventHandler};
///
/// let handler = FnEventHandler::new("position_logger", |event: &Event| {
///     println!("saw {:?}", event.params());
///     Ok(())
/// });
/// ```
pub struct FnEventHandler<F>
where
    F: Fn(&Event) -> Result<(), EventError> + Send + Sync + 'static,
{
    name: String,
    handler: F,
}

impl<F> FnEventHandler<F>
where
    F: Fn(&Event) -> Result<(), EventError> + Send + Sync + 'static,
{
    /// Creates a new closure-backed handler.
    ///
    /// # Arguments
    ///
    /// * `name` - Human-readable name for diagnostics
    /// * `handler` - Function invoked with each dispatched event
    pub fn new(name: impl Into<String>, handler: F) -> Self {
        Self {
            name: name.into(),
            handler,
        }
    }
}

impl<F> Debug for FnEventHandler<F>
where
    F: Fn(&Event) -> Result<(), EventError> + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnEventHandler")
            .field("name", &self.name)
            .finish()
    }
}

#[async_trait]
impl<F> EventHandler for FnEventHandler<F>
where
    F: Fn(&Event) -> Result<(), EventError> + Send + Sync + 'static,
{
    async fn on_event(&self, event: &Event) -> Result<(), EventError> {
        (self.handler)(event)
    }

    fn handler_name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur during event system operations.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// Converting a typed parameter into its opaque representation failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Handler execution failed during event dispatch
    #[error("handler execution error: {0}")]
    HandlerExecution(String),
    #[error("an unexpected error occurred: {0}")]
    Other(String),
}

// Tests module
mod tests;
