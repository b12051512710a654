/// Handler registration and removal methods
use super::core::EventManager;
use crate::events::EventHandler;
use compact_str::CompactString;
use std::sync::Arc;
use tracing::info;

impl EventManager {
    /// Registers a handler for a specific event type.
    ///
    /// The handler is appended to the type's list; lists preserve insertion
    /// order and allow duplicates, so registering the same handler twice for
    /// one type produces two notifications per event.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use tempo_event_system::{EventManager, EventHandler, FnEventHandler, Event};
    /// use std::sync::Arc;
    ///
    /// # async fn example() {
    /// let events = EventManager::new();
    /// let handler: Arc<dyn EventHandler> =
    ///     Arc::new(FnEventHandler::new("chat_logger", |event: &Event| {
    ///         println!("chat: {:?}", event.params());
    ///         Ok(())
    ///     }));
    /// events.register("chat_message", handler).await;
    /// # }
    /// ```
    pub async fn register(&self, event_type: &str, handler: Arc<dyn EventHandler>) {
        let handler_name = handler.handler_name().to_string();
        self.handlers
            .entry(CompactString::new(event_type))
            .or_insert_with(Vec::new)
            .push(handler);

        let mut stats = self.stats.write().await;
        stats.total_handlers += 1;
        drop(stats);

        info!("📝 Registered handler {} for {}", handler_name, event_type);
    }

    /// Registers a handler for every event type.
    ///
    /// Catch-all handlers are notified before the per-type handlers of each
    /// dispatched event, regardless of the event's type.
    pub async fn register_all(&self, handler: Arc<dyn EventHandler>) {
        let handler_name = handler.handler_name().to_string();
        self.catch_all.write().await.push(handler);

        let mut stats = self.stats.write().await;
        stats.total_handlers += 1;
        drop(stats);

        info!("📝 Registered catch-all handler {}", handler_name);
    }

    /// Removes a handler's registrations for a specific event type.
    ///
    /// Every occurrence of the handler in that type's list is removed;
    /// identity is `Arc` pointer equality. Deregistering a handler that was
    /// never registered is a no-op. Returns the number of registrations
    /// removed.
    pub async fn deregister(&self, event_type: &str, handler: &Arc<dyn EventHandler>) -> usize {
        let mut removed = 0;
        if let Some(mut entry) = self.handlers.get_mut(event_type) {
            entry.value_mut().retain(|registered| {
                if Arc::ptr_eq(registered, handler) {
                    removed += 1;
                    false
                } else {
                    true
                }
            });
        }

        if removed > 0 {
            let mut stats = self.stats.write().await;
            stats.total_handlers = stats.total_handlers.saturating_sub(removed);
            drop(stats);

            info!(
                "🗑️ Removed {} registration(s) of {} for {}",
                removed,
                handler.handler_name(),
                event_type
            );
        }
        removed
    }

    /// Removes a handler from the catch-all list and from every per-type
    /// list.
    ///
    /// Scans each type's list individually, so registrations across any
    /// number of types are all dropped. Returns the total number of
    /// registrations removed.
    pub async fn deregister_all(&self, handler: &Arc<dyn EventHandler>) -> usize {
        let mut removed = 0;

        {
            let mut catch_all = self.catch_all.write().await;
            catch_all.retain(|registered| {
                if Arc::ptr_eq(registered, handler) {
                    removed += 1;
                    false
                } else {
                    true
                }
            });
        }

        for mut entry in self.handlers.iter_mut() {
            entry.value_mut().retain(|registered| {
                if Arc::ptr_eq(registered, handler) {
                    removed += 1;
                    false
                } else {
                    true
                }
            });
        }

        if removed > 0 {
            let mut stats = self.stats.write().await;
            stats.total_handlers = stats.total_handlers.saturating_sub(removed);
            drop(stats);

            info!(
                "🗑️ Removed {} registration(s) of {} across all event types",
                removed,
                handler.handler_name()
            );
        }
        removed
    }
}
