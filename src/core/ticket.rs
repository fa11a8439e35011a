use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::ServiceCategory;

/// Minutes of estimated wait per customer ahead in the queue.
pub const MINUTES_PER_CUSTOMER: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Waiting,
    Serving,
    Completed,
    Cancelled,
}

/// One customer's queue entry. `id` and `number` never change after
/// minting; only `status` mutates over the ticket lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub prefix: String,
    pub number: String,
    pub display_number: u32,
    pub category: ServiceCategory,
    pub service_name: String,
    pub timestamp: DateTime<Utc>,
    pub status: TicketStatus,
}

impl Ticket {
    pub(crate) fn mint(category: ServiceCategory, display_number: u32) -> Self {
        let config = category.config();
        let number = format!("{:03}", display_number);
        Self {
            id: format!("{}{}", config.prefix, number),
            prefix: config.prefix.to_string(),
            number,
            display_number,
            category,
            service_name: config.name.to_string(),
            timestamp: Utc::now(),
            status: TicketStatus::Waiting,
        }
    }
}

/// A freshly minted ticket plus its queue position at issue time.
#[derive(Debug, Clone)]
pub struct IssuedTicket {
    pub ticket: Ticket,
    /// Customers already waiting when this ticket was taken.
    pub waiting_count: usize,
    pub estimated_minutes: u32,
}
