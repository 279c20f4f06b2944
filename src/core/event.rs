use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use compact_str::CompactString;
use rustc_hash::FxHashMap;

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Listener<T> {
    id: u64,
    callback: Callback<T>,
}

struct HubState<T> {
    listeners: FxHashMap<CompactString, Vec<Listener<T>>>,
}

/// 订阅选项：`initial` 存在时，回调在订阅当下立即同步触发一次
pub struct SubscribeOptions<T> {
    pub initial: Option<T>,
}

impl<T> Default for SubscribeOptions<T> {
    fn default() -> Self {
        Self { initial: None }
    }
}

/// 订阅句柄。`unsubscribe` 幂等；Drop 不会自动退订
pub struct Subscription {
    cancel: Box<dyn Fn() + Send + Sync>,
}

impl Subscription {
    pub fn unsubscribe(&self) {
        (self.cancel)()
    }
}

/// 字符串键控的同步事件中心，按注册顺序分发
pub struct EventHub<T> {
    state: Arc<Mutex<HubState<T>>>,
    next_id: AtomicU64,
}

impl<T: Send + 'static> EventHub<T> {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(HubState {
                listeners: FxHashMap::default(),
            })),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn subscribe<F>(&self, event: &str, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.subscribe_with(event, SubscribeOptions::default(), callback)
    }

    pub fn subscribe_with<F>(
        &self,
        event: &str,
        options: SubscribeOptions<T>,
        callback: F,
    ) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let callback: Callback<T> = Arc::new(callback);
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        {
            let mut state = self.state.lock().expect("event hub lock poisoned");
            state
                .listeners
                .entry(CompactString::from(event))
                .or_default()
                .push(Listener {
                    id,
                    callback: Arc::clone(&callback),
                });
        }

        if let Some(payload) = options.initial.as_ref() {
            invoke(&callback, payload, event);
        }

        let state = Arc::downgrade(&self.state);
        let name = CompactString::from(event);
        Subscription {
            cancel: Box::new(move || remove_listener(&state, &name, id)),
        }
    }

    /// 同步分发：持锁快照监听列表，在锁外逐个调用。
    /// 回调中订阅/退订对本次分发不可见，下次分发生效。
    pub fn dispatch(&self, event: &str, payload: &T) {
        let snapshot: Vec<Callback<T>> = {
            let state = self.state.lock().expect("event hub lock poisoned");
            match state.listeners.get(event) {
                Some(list) => list.iter().map(|l| Arc::clone(&l.callback)).collect(),
                None => return,
            }
        };

        for callback in &snapshot {
            invoke(callback, payload, event);
        }
    }
}

impl<T: Send + 'static> Default for EventHub<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn invoke<T>(callback: &Callback<T>, payload: &T, event: &str) {
    let f = callback.as_ref();
    if catch_unwind(AssertUnwindSafe(|| f(payload))).is_err() {
        tracing::error!(event = %event, "event callback panicked");
    }
}

fn remove_listener<T>(state: &Weak<Mutex<HubState<T>>>, name: &CompactString, id: u64) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let mut state = state.lock().expect("event hub lock poisoned");
    let emptied = match state.listeners.get_mut(name.as_str()) {
        Some(list) => {
            list.retain(|l| l.id != id);
            list.is_empty()
        }
        None => false,
    };
    if emptied {
        state.listeners.remove(name.as_str());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
