use serde::{Deserialize, Serialize};

use super::category::ServiceCategory;
use super::ticket::Ticket;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TellerStatus {
    Active,
    Break,
    Closed,
}

/// A staff unit able to serve at most one ticket at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teller {
    pub id: u32,
    pub name: String,
    pub category: ServiceCategory,
    pub services: Vec<String>,
    pub status: TellerStatus,
    pub serving: Option<Ticket>,
}

impl Teller {
    pub fn new(id: u32, name: &str, category: ServiceCategory) -> Self {
        Self {
            id,
            name: name.to_string(),
            category,
            services: category
                .config()
                .services
                .iter()
                .map(|s| s.to_string())
                .collect(),
            status: TellerStatus::Active,
            serving: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.status == TellerStatus::Active && self.serving.is_none()
    }
}

/// The default branch roster: two tellers and two customer service desks.
pub fn default_tellers() -> Vec<Teller> {
    vec![
        Teller::new(1, "Teller 1", ServiceCategory::Teller),
        Teller::new(2, "Teller 2", ServiceCategory::Teller),
        Teller::new(3, "Customer Service 1", ServiceCategory::CustomerService),
        Teller::new(4, "Customer Service 2", ServiceCategory::CustomerService),
    ]
}

/// A teller currently calling a customer, as shown on the monitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveCall {
    pub teller_id: u32,
    pub teller_name: String,
    pub ticket_id: String,
    pub prefix: String,
    pub number: String,
    pub display_number: u32,
    pub category: ServiceCategory,
}

impl ActiveCall {
    pub(crate) fn new(teller_id: u32, teller_name: &str, ticket: &Ticket) -> Self {
        Self {
            teller_id,
            teller_name: teller_name.to_string(),
            ticket_id: ticket.id.clone(),
            prefix: ticket.prefix.clone(),
            number: ticket.number.clone(),
            display_number: ticket.display_number,
            category: ticket.category,
        }
    }
}
