/// The tick cycle: recycle, dispatch, promote
use super::core::EventManager;
use crate::config::DispatchErrorPolicy;
use crate::events::{Event, EventError, EventHandler};
use std::mem;
use std::sync::Arc;
use tracing::{debug, error, trace};

impl EventManager {
    /// Runs one dispatch cycle. The host loop awaits this once per frame or
    /// loop iteration; all delivery guarantees are defined in terms of tick
    /// boundaries.
    ///
    /// Each cycle executes three ordered phases:
    ///
    /// 1. **Recycle** — events dispatched on the previous tick are reset and
    ///    returned to the pool.
    /// 2. **Dispatch** — the current batch is sorted by ascending priority
    ///    and each event is delivered to all catch-all handlers, then all
    ///    handlers registered for its type. Dispatched events move to the
    ///    notified queue.
    /// 3. **Promote** — events raised since the last tick move into the
    ///    current batch, in raise order, for dispatch on the next tick.
    ///
    /// With the `Propagate` error policy a handler failure ends the dispatch
    /// phase early: the failing event still moves to the notified queue (its
    /// earlier handlers already ran), undispatched events stay in the current
    /// batch, and the bookkeeping phases complete so nothing is stranded.
    ///
    /// `tick` must not be awaited concurrently with itself; drive it from a
    /// single task. Raising and registering from other tasks is safe at any
    /// time.
    pub async fn tick(&self) -> Result<(), EventError> {
        // Phase 1: recycle everything dispatched on the previous tick.
        let notified = mem::take(&mut *self.events_notified.lock().await);
        let recycled = notified.len();
        for event in notified {
            self.event_pool.free(event);
        }
        if recycled > 0 {
            trace!("♻️ Returned {} dispatched event(s) to the pool", recycled);
        }

        // Phase 2: dispatch the current batch in ascending priority order.
        // The batch is swapped out of its lock first so no lock is held
        // across handler awaits. Vec::sort is stable, but relative order of
        // equal priorities is not part of the contract.
        let mut batch = mem::take(&mut *self.events_current.lock().await);
        batch.sort();

        let mut dispatched = Vec::with_capacity(batch.len());
        let mut first_error = None;
        let mut events = batch.into_iter();
        for event in events.by_ref() {
            match self.notify(&event).await {
                Ok(()) => dispatched.push(event),
                Err(e) => {
                    // earlier handlers already saw this event, so it is
                    // consumed and recycled like any dispatched event
                    dispatched.push(event);
                    first_error = Some(e);
                    break;
                }
            }
        }
        let leftover: Vec<Event> = events.collect();

        if !dispatched.is_empty() {
            debug!("📬 Dispatched {} event(s) this tick", dispatched.len());
            self.events_notified.lock().await.extend(dispatched);
        }
        if !leftover.is_empty() {
            let mut current = self.events_current.lock().await;
            let tail = mem::take(&mut *current);
            *current = leftover;
            current.extend(tail);
        }

        // Phase 3: promote events raised since the last tick began.
        let promoted = mem::take(&mut *self.events_new.lock().await);
        if !promoted.is_empty() {
            self.events_current.lock().await.extend(promoted);
        }

        {
            let mut stats = self.stats.write().await;
            stats.ticks += 1;
            stats.events_recycled += recycled as u64;
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Notifies all interested handlers of a single event: the catch-all
    /// list first, then the handlers registered for the event's type, in
    /// registration order.
    pub(super) async fn notify(&self, event: &Event) -> Result<(), EventError> {
        // handler lists are cloned out; no registry lock is held while
        // handlers run
        let catch_all: Vec<Arc<dyn EventHandler>> = self.catch_all.read().await.clone();
        for handler in &catch_all {
            self.run_handler(handler.as_ref(), event).await?;
        }

        let typed: Vec<Arc<dyn EventHandler>> = self
            .handlers
            .get(event.event_type())
            .map(|entry| entry.value().clone())
            .unwrap_or_default();
        for handler in &typed {
            self.run_handler(handler.as_ref(), event).await?;
        }

        let mut stats = self.stats.write().await;
        stats.events_dispatched += 1;
        Ok(())
    }

    /// Runs one handler, applying the configured dispatch error policy.
    async fn run_handler(
        &self,
        handler: &dyn EventHandler,
        event: &Event,
    ) -> Result<(), EventError> {
        match handler.on_event(event).await {
            Ok(()) => Ok(()),
            Err(e) => match self.config.error_policy {
                DispatchErrorPolicy::LogAndContinue => {
                    error!(
                        "❌ Handler {} failed for {}: {}",
                        handler.handler_name(),
                        event.event_type(),
                        e
                    );
                    Ok(())
                }
                DispatchErrorPolicy::Propagate => Err(e),
            },
        }
    }
}
