use super::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[test]
fn test_dispatch_in_registration_order() {
    let hub: EventHub<i32> = EventHub::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    for label in ["a", "b", "c"] {
        let order = Arc::clone(&order);
        hub.subscribe("evt", move |_: &i32| order.lock().unwrap().push(label));
    }

    hub.dispatch("evt", &1);
    assert_eq!(*order.lock().unwrap(), ["a", "b", "c"]);

    // 无监听者的事件静默
    hub.dispatch("nobody", &1);
}

#[test]
fn test_payload_passed_to_each_listener() {
    let hub: EventHub<String> = EventHub::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    for _ in 0..2 {
        let seen = Arc::clone(&seen);
        hub.subscribe("evt", move |payload: &String| {
            seen.lock().unwrap().push(payload.clone());
        });
    }

    hub.dispatch("evt", &"hello".to_string());
    assert_eq!(*seen.lock().unwrap(), ["hello", "hello"]);
}

#[test]
fn test_initial_run_fires_once_immediately() {
    let hub: EventHub<Option<String>> = EventHub::new();
    let seen: Arc<Mutex<Vec<Option<String>>>> = Arc::new(Mutex::new(Vec::new()));

    let seen2 = Arc::clone(&seen);
    let _sub = hub.subscribe_with(
        "evt",
        SubscribeOptions { initial: Some(None) },
        move |payload| seen2.lock().unwrap().push(payload.clone()),
    );
    assert_eq!(*seen.lock().unwrap(), vec![None]);

    hub.dispatch("evt", &Some("x".to_string()));
    assert_eq!(
        *seen.lock().unwrap(),
        vec![None, Some("x".to_string())]
    );
}

#[test]
fn test_unsubscribe_idempotent() {
    let hub: EventHub<i32> = EventHub::new();
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let sub = {
        let first = Arc::clone(&first);
        hub.subscribe("evt", move |_| {
            first.fetch_add(1, Ordering::SeqCst);
        })
    };
    let _keep = {
        let second = Arc::clone(&second);
        hub.subscribe("evt", move |_| {
            second.fetch_add(1, Ordering::SeqCst);
        })
    };

    sub.unsubscribe();
    sub.unsubscribe();

    hub.dispatch("evt", &1);
    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[test]
fn test_duplicate_listeners_fire_independently() {
    let hub: EventHub<i32> = EventHub::new();
    let count = Arc::new(AtomicUsize::new(0));

    let subs: Vec<Subscription> = (0..2)
        .map(|_| {
            let count = Arc::clone(&count);
            hub.subscribe("evt", move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            })
        })
        .collect();

    hub.dispatch("evt", &1);
    assert_eq!(count.load(Ordering::SeqCst), 2);

    subs[0].unsubscribe();
    hub.dispatch("evt", &1);
    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[test]
fn test_panicking_callback_isolated() {
    let hub: EventHub<i32> = EventHub::new();
    let survived = Arc::new(AtomicUsize::new(0));

    hub.subscribe("evt", |_| panic!("boom"));
    {
        let survived = Arc::clone(&survived);
        hub.subscribe("evt", move |_| {
            survived.fetch_add(1, Ordering::SeqCst);
        });
    }

    hub.dispatch("evt", &1);
    hub.dispatch("evt", &1);
    assert_eq!(survived.load(Ordering::SeqCst), 2);
}

#[test]
fn test_subscribe_during_dispatch_takes_effect_next_time() {
    let hub = Arc::new(EventHub::<i32>::new());
    let late_calls = Arc::new(AtomicUsize::new(0));

    {
        let hub = Arc::clone(&hub);
        let late_calls = Arc::clone(&late_calls);
        hub.clone().subscribe("evt", move |_| {
            let late_calls = Arc::clone(&late_calls);
            // 句柄即弃：Drop 不退订，监听保留
            let _ = hub.subscribe("evt", move |_| {
                late_calls.fetch_add(1, Ordering::SeqCst);
            });
        });
    }

    hub.dispatch("evt", &1);
    assert_eq!(late_calls.load(Ordering::SeqCst), 0);

    hub.dispatch("evt", &1);
    assert_eq!(late_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unsubscribe_during_dispatch_takes_effect_next_time() {
    let hub: EventHub<i32> = EventHub::new();
    let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
    let calls = Arc::new(AtomicUsize::new(0));

    {
        let slot = Arc::clone(&slot);
        hub.subscribe("evt", move |_| {
            if let Some(sub) = slot.lock().unwrap().as_ref() {
                sub.unsubscribe();
            }
        });
    }
    let sub = {
        let calls = Arc::clone(&calls);
        hub.subscribe("evt", move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
        })
    };
    *slot.lock().unwrap() = Some(sub);

    // 本次分发仍按快照触发，下次不再触发
    hub.dispatch("evt", &1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    hub.dispatch("evt", &1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
