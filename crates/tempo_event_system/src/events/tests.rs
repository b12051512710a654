#[cfg(test)]
mod tests {
    use crate::events::{Event, EventHandler, FnEventHandler};
    use crate::pool::Poolable;
    use serde::Serialize;
    use serde_json::json;

    #[test]
    fn ordering_is_priority_only() {
        let low = Event::new("alpha").with_priority(1);
        let high = Event::new("beta").with_priority(5);

        assert!(low < high);
        assert!(high > low);

        // equal priority compares equal regardless of payload
        let a = Event::with_params("one", [json!(1)]).with_priority(3);
        let b = Event::with_params("two", [json!("x"), json!("y")]).with_priority(3);
        assert_eq!(a, b);
    }

    #[test]
    fn sorting_orders_by_ascending_priority() {
        let mut batch = vec![
            Event::new("a").with_priority(5),
            Event::new("b").with_priority(1),
            Event::new("c").with_priority(3),
        ];
        batch.sort();

        let types: Vec<&str> = batch.iter().map(|e| e.event_type()).collect();
        assert_eq!(types, vec!["b", "c", "a"]);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut event = Event::with_params("entity_moved", [json!(10), json!(20)]).with_priority(7);
        event.reset();

        assert_eq!(event.event_type(), "");
        assert_eq!(event.priority(), 0);
        assert!(event.params().is_empty());
    }

    #[test]
    fn pooled_reuse_overwrites_fields() {
        let mut event = Event::new("old").with_priority(9);
        event.reset();
        event.set_event_type("new");
        event.set_params([json!(true)]);

        assert_eq!(event.event_type(), "new");
        assert_eq!(event.priority(), 0);
        assert_eq!(event.params(), &[json!(true)]);
    }

    #[test]
    fn push_param_serializes_typed_values() {
        #[derive(Serialize)]
        struct Hit {
            target: u32,
            amount: f32,
        }

        let mut event = Event::new("entity_damaged");
        event
            .push_param(&Hit {
                target: 9,
                amount: 12.5,
            })
            .unwrap();

        assert_eq!(event.params()[0], json!({"target": 9, "amount": 12.5}));
    }

    #[test]
    fn event_serde_round_trip() {
        let event = Event::with_params("chat_message", [json!("hello"), json!(42)]).with_priority(2);

        let bytes = serde_json::to_vec(&event).unwrap();
        let recovered: Event = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(recovered.event_type(), "chat_message");
        assert_eq!(recovered.priority(), 2);
        assert_eq!(recovered.params(), event.params());
    }

    #[tokio::test]
    async fn fn_event_handler_invokes_closure() {
        use std::sync::{Arc, Mutex};

        let log = Arc::new(Mutex::new(Vec::new()));
        let log_clone = log.clone();
        let handler = FnEventHandler::new("recorder", move |event: &Event| {
            log_clone.lock().unwrap().push(event.event_type().to_string());
            Ok(())
        });

        assert_eq!(handler.handler_name(), "recorder");
        handler.on_event(&Event::new("ping")).await.unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["ping".to_string()]);
    }
}
