/// Event checkout and raising methods
use super::core::EventManager;
use crate::events::{Event, EventError};
use tracing::debug;

impl EventManager {
    /// Gets a blank event from the pool, tagged for raising.
    ///
    /// The returned instance is either freshly constructed or a reset,
    /// previously dispatched event; either way its priority is 0 and its
    /// parameter list is empty. The type string is not validated.
    pub fn new_event(&self, event_type: &str) -> Event {
        self.new_event_with_params(event_type, std::iter::empty())
    }

    /// Gets a pooled event tagged for raising, carrying the given parameters.
    pub fn new_event_with_params<I>(&self, event_type: &str, params: I) -> Event
    where
        I: IntoIterator<Item = serde_json::Value>,
    {
        let mut event = match self.event_pool.get() {
            Some(event) => event,
            // the manager's own pool is unbounded, so this only covers the
            // Option in the pool contract
            None => Event::default(),
        };
        event.set_event_type(event_type);
        event.set_params(params);
        event
    }

    /// Raises an event for dispatch on a future tick.
    ///
    /// The event joins the new-events queue and is promoted into the dispatch
    /// batch at the end of the next `tick`, so delivery happens on the tick
    /// after that. There is no ordering guarantee relative to the current
    /// tick boundary.
    pub async fn raise(&self, event: Event) {
        debug!(
            "📤 Queued event {} (priority {})",
            event.event_type(),
            event.priority()
        );
        self.events_new.lock().await.push(event);

        let mut stats = self.stats.write().await;
        stats.events_raised += 1;
    }

    /// Dispatches an event to all interested handlers before returning.
    ///
    /// The event bypasses every queue: handlers run on the calling task, and
    /// the instance goes straight back to the pool once they finish. With the
    /// `Propagate` error policy the first handler error is returned and any
    /// remaining handlers for this event are skipped; the event is recycled
    /// either way.
    ///
    /// Immediate dispatch interleaves with whatever state handlers share with
    /// the ticked dispatch path — the manager does not serialize the two.
    /// Callers raising immediately from multiple tasks should bring their own
    /// ordering.
    pub async fn raise_immediate(&self, event: Event) -> Result<(), EventError> {
        debug!(
            "📤 Raising immediate event {} (priority {})",
            event.event_type(),
            event.priority()
        );
        {
            let mut stats = self.stats.write().await;
            stats.events_raised += 1;
        }

        let result = self.notify(&event).await;

        // immediates skip the notified queue; recycle as soon as handlers return
        self.event_pool.free(event);
        let mut stats = self.stats.write().await;
        stats.events_recycled += 1;
        drop(stats);

        result
    }
}
