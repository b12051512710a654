/// Event manager introspection and utility methods
use super::core::EventManager;

impl EventManager {
    /// Checks whether any handlers are registered for a specific event type.
    /// Catch-all handlers are not considered.
    #[inline]
    pub fn has_handlers(&self, event_type: &str) -> bool {
        self.handlers
            .get(event_type)
            .map(|entry| !entry.value().is_empty())
            .unwrap_or(false)
    }

    /// Gets the number of handlers registered for a specific event type.
    #[inline]
    pub fn handler_count(&self, event_type: &str) -> usize {
        self.handlers
            .get(event_type)
            .map(|entry| entry.value().len())
            .unwrap_or(0)
    }

    /// Gets all event types with at least one registration.
    pub fn registered_event_types(&self) -> Vec<String> {
        self.handlers
            .iter()
            .filter(|entry| !entry.value().is_empty())
            .map(|entry| entry.key().to_string())
            .collect()
    }

    /// Number of raised events not yet dispatched (new plus current batch).
    pub async fn pending_event_count(&self) -> usize {
        self.events_new.lock().await.len() + self.events_current.lock().await.len()
    }
}
