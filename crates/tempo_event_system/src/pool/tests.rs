#[cfg(test)]
mod tests {
    use crate::events::Event;
    use crate::pool::{Pool, Poolable};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Default)]
    struct Slot {
        value: u32,
    }

    impl Poolable for Slot {
        fn reset(&mut self) {
            self.value = 0;
        }
    }

    #[test]
    fn bounded_pool_exhaustion_and_recovery() {
        let pool = Pool::bounded(Event::default, 1);

        let mut first = pool.get().expect("first get constructs");
        first.set_event_type("mutated");
        first.set_priority(4);
        first.set_params([json!("payload")]);

        // cap reached and nothing free: explicit unavailable result
        assert!(pool.get().is_none());

        pool.free(first);
        let recycled = pool.get().expect("get succeeds after free");
        assert_eq!(recycled.event_type(), "");
        assert_eq!(recycled.priority(), 0);
        assert!(recycled.params().is_empty());
    }

    #[test]
    fn unbounded_pool_always_constructs() {
        let pool = Pool::new(Slot::default);
        assert_eq!(pool.capacity(), None);

        let a = pool.get().expect("unbounded get");
        let b = pool.get().expect("unbounded get");
        pool.free(a);
        pool.free(b);
        assert_eq!(pool.idle(), 2);
    }

    #[test]
    fn recycling_does_not_invoke_factory() {
        let built = Arc::new(AtomicUsize::new(0));
        let counter = built.clone();
        let pool = Pool::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Slot::default()
        });

        let slot = pool.get().expect("constructs once");
        pool.free(slot);
        let slot = pool.get().expect("reuses the freed slot");
        pool.free(slot);

        assert_eq!(built.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn free_resets_before_reuse() {
        let pool = Pool::new(Slot::default);
        let mut slot = pool.get().expect("get");
        slot.value = 99;
        pool.free(slot);

        let slot = pool.get().expect("get recycled");
        assert_eq!(slot.value, 0);
    }

    #[test]
    fn concurrent_get_free_respects_capacity() {
        let built = Arc::new(AtomicUsize::new(0));
        let counter = built.clone();
        let pool = Arc::new(Pool::bounded(
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Slot::default()
            },
            4,
        ));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let pool = pool.clone();
            handles.push(std::thread::spawn(move || {
                for _ in 0..200 {
                    if let Some(slot) = pool.get() {
                        pool.free(slot);
                    }
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(built.load(Ordering::SeqCst) <= 4);
    }
}
