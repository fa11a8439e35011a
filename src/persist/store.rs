use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::order::{HistoryRecord, Order};

use super::backend::StorageBackend;

pub const QUEUE_LIST_KEY: &str = "queue_list";
pub const QUEUE_COUNTER_KEY: &str = "queue_counter";
pub const ORDER_HISTORY_KEY: &str = "order_history";

/// Typed adapter over a [`StorageBackend`] holding the three queue
/// keys. Loads fall back to safe defaults; saves are best-effort and
/// never surface an error to the caller.
pub struct QueuePersistence {
    backend: Box<dyn StorageBackend>,
}

impl QueuePersistence {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn load_queue_list(&self) -> Vec<Order> {
        self.load_json(QUEUE_LIST_KEY, Vec::new())
    }

    pub fn save_queue_list(&mut self, orders: &[Order]) {
        self.save_json(QUEUE_LIST_KEY, &orders);
    }

    pub fn load_counter(&self) -> u32 {
        self.load_json(QUEUE_COUNTER_KEY, 1)
    }

    pub fn save_counter(&mut self, counter: u32) {
        self.save_json(QUEUE_COUNTER_KEY, &counter);
    }

    pub fn load_history(&self) -> Vec<HistoryRecord> {
        self.load_json(ORDER_HISTORY_KEY, Vec::new())
    }

    pub fn save_history(&mut self, history: &[HistoryRecord]) {
        self.save_json(ORDER_HISTORY_KEY, &history);
    }

    pub fn clear_all(&mut self) {
        for key in [QUEUE_LIST_KEY, QUEUE_COUNTER_KEY, ORDER_HISTORY_KEY] {
            if let Err(err) = self.backend.remove(key) {
                warn!("[Persistence] failed to clear '{}': {}", key, err);
            }
        }
        debug!("[Persistence] all keys cleared");
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.backend.load(key) else {
            return default;
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!("[Persistence] malformed data under '{}': {}", key, err);
                default
            }
        }
    }

    fn save_json<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => {
                if let Err(err) = self.backend.store(key, &raw) {
                    warn!("[Persistence] failed to save '{}': {}", key, err);
                }
            }
            Err(err) => warn!("[Persistence] failed to encode '{}': {}", key, err),
        }
    }
}
