//! Minimal host loop driving the event manager for a few ticks.

use serde_json::json;
use std::sync::Arc;
use tempo_event_system::{create_event_manager, Event, EventHandler, FnEventHandler};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let events = create_event_manager();

    // Catch-all observer sees every event type
    let audit: Arc<dyn EventHandler> = Arc::new(FnEventHandler::new("audit", |event: &Event| {
        info!(
            "observed {} (priority {})",
            event.event_type(),
            event.priority()
        );
        Ok(())
    }));
    events.register_all(audit).await;

    // Typed handler only sees its own event type
    let damage: Arc<dyn EventHandler> =
        Arc::new(FnEventHandler::new("damage_applier", |event: &Event| {
            info!("applying damage: {:?}", event.params());
            Ok(())
        }));
    events.register("entity_damaged", damage).await;

    // Deferred, prioritized events: lower priority dispatches first
    events
        .raise(events.new_event("world_saved").with_priority(5))
        .await;
    events
        .raise(
            events
                .new_event_with_params("entity_damaged", [json!({"entity": 7, "amount": 12.5})])
                .with_priority(1),
        )
        .await;

    // An immediate event reaches handlers before raise_immediate returns
    events
        .raise_immediate(events.new_event("server_started"))
        .await?;

    // Host loop: one tick per frame
    for _ in 0..3 {
        events.tick().await?;
    }

    let stats = events.get_stats().await;
    info!(
        "done: {} raised, {} dispatched, {} recycled over {} ticks",
        stats.events_raised, stats.events_dispatched, stats.events_recycled, stats.ticks
    );
    Ok(())
}
