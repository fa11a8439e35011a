use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::menu::{MenuCategory, MenuItem};

/// Cancel reason recorded when an order is evicted by the skip rule.
pub const SKIP_LIMIT_REASON: &str = "skip limit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Waiting,
    Preparing,
    Completed,
    Cancelled,
}

/// One menu line of an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: u32,
    pub name: String,
    pub category: MenuCategory,
    pub price: u32,
    pub quantity: u32,
}

impl OrderItem {
    pub fn from_menu(item: &MenuItem, quantity: u32) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            category: item.category,
            price: item.price,
            quantity,
        }
    }

    pub fn subtotal(&self) -> u32 {
        self.price * self.quantity
    }
}

/// One customer's restaurant order. The queue number is the public
/// display identity; `id` is unique across counter resets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub queue_number: u32,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub payment_method: String,
    pub skip_count: u32,
    /// Set when the pickup call has gone out for a ready order.
    pub called: bool,
    pub timestamp: DateTime<Utc>,
}

impl Order {
    pub(crate) fn new(
        queue_number: u32,
        customer_name: &str,
        items: Vec<OrderItem>,
        payment_method: &str,
    ) -> Self {
        Self {
            id: format!("order_{}", Uuid::new_v4()),
            queue_number,
            customer_name: customer_name.to_string(),
            items,
            status: OrderStatus::Waiting,
            payment_method: payment_method.to_string(),
            skip_count: 0,
            called: false,
            timestamp: Utc::now(),
        }
    }

    pub fn total(&self) -> u32 {
        self.items.iter().map(|item| item.subtotal()).sum()
    }

    /// Whether the order contains a main-course item. These orders are
    /// deprioritized by the waiting-queue reorder pass.
    pub fn has_primary_item(&self) -> bool {
        self.items
            .iter()
            .any(|item| item.category == MenuCategory::MainCourse)
    }
}

/// An archived order with its completion time and, for cancellations,
/// the reason it left the queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub order: Order,
    pub completed_at: DateTime<Utc>,
    pub cancel_reason: Option<String>,
}
