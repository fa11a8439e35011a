use std::collections::{HashMap, VecDeque};

use log::{debug, info, warn};

use super::announce::{bank_call_text, Announcer, LogAnnouncer};
use super::category::ServiceCategory;
use super::teller::{default_tellers, ActiveCall, Teller, TellerStatus};
use super::ticket::{IssuedTicket, Ticket, TicketStatus, MINUTES_PER_CUSTOMER};

/// The bank teller queue store: per-category counters and FIFO waiting
/// queues, the teller roster, and the calls currently on the monitor.
///
/// A ticket lives in exactly one place at a time: a waiting queue, a
/// teller's serving slot, or the history list.
pub struct BankQueue {
    counters: HashMap<ServiceCategory, u32>,
    queues: HashMap<ServiceCategory, VecDeque<Ticket>>,
    tellers: Vec<Teller>,
    current_calls: Vec<ActiveCall>,
    history: Vec<Ticket>,
    voice_enabled: bool,
    announcer: Box<dyn Announcer>,
}

impl BankQueue {
    pub fn new() -> Self {
        Self::with_announcer(Box::new(LogAnnouncer))
    }

    pub fn with_announcer(announcer: Box<dyn Announcer>) -> Self {
        let mut counters = HashMap::new();
        let mut queues = HashMap::new();
        for category in ServiceCategory::ALL {
            counters.insert(category, 1);
            queues.insert(category, VecDeque::new());
        }
        Self {
            counters,
            queues,
            tellers: default_tellers(),
            current_calls: Vec::new(),
            history: Vec::new(),
            voice_enabled: true,
            announcer,
        }
    }

    pub fn with_tellers(mut self, tellers: Vec<Teller>) -> Self {
        self.tellers = tellers;
        self
    }

    /// Mint a ticket for the given category and append it to the
    /// category's waiting queue. Returns the ticket plus a wait
    /// estimate based on the customers already ahead of it.
    pub fn take_ticket(&mut self, category: ServiceCategory) -> IssuedTicket {
        let counter = self.counters.entry(category).or_insert(1);
        let number = *counter;
        *counter += 1;

        let ticket = Ticket::mint(category, number);
        let queue = self.queues.entry(category).or_default();
        let waiting_count = queue.len();
        queue.push_back(ticket.clone());

        info!(
            "[BankQueue] issued {} ({}), {} ahead",
            ticket.id,
            category.config().name,
            waiting_count
        );

        IssuedTicket {
            ticket,
            waiting_count,
            estimated_minutes: waiting_count as u32 * MINUTES_PER_CUSTOMER,
        }
    }

    /// String-keyed variant of [`take_ticket`] for kiosk front-ends.
    /// An unknown key produces no ticket.
    ///
    /// [`take_ticket`]: BankQueue::take_ticket
    pub fn take_ticket_by_key(&mut self, key: &str) -> Option<IssuedTicket> {
        match ServiceCategory::from_key(key) {
            Some(category) => Some(self.take_ticket(category)),
            None => {
                warn!("[BankQueue] unknown service category '{}'", key);
                None
            }
        }
    }

    /// Pop the head of the teller's category queue into its serving
    /// slot and announce the call. No-op when the teller is unknown,
    /// not active, already serving, or its queue is empty.
    pub fn call_next(&mut self, teller_id: u32) -> Option<Ticket> {
        let Some(pos) = self.tellers.iter().position(|t| t.id == teller_id) else {
            warn!("[BankQueue] call_next: unknown teller {}", teller_id);
            return None;
        };
        if self.tellers[pos].status != TellerStatus::Active {
            debug!("[BankQueue] teller {} is not active", teller_id);
            return None;
        }
        if self.tellers[pos].serving.is_some() {
            debug!("[BankQueue] teller {} is already serving", teller_id);
            return None;
        }

        let category = self.tellers[pos].category;
        let Some(mut ticket) = self
            .queues
            .get_mut(&category)
            .and_then(|queue| queue.pop_front())
        else {
            debug!("[BankQueue] no waiting tickets for {}", category);
            return None;
        };

        ticket.status = TicketStatus::Serving;
        let teller_name = self.tellers[pos].name.clone();
        self.tellers[pos].serving = Some(ticket.clone());

        // A teller has at most one call on the monitor.
        self.current_calls.retain(|c| c.teller_id != teller_id);
        self.current_calls
            .push(ActiveCall::new(teller_id, &teller_name, &ticket));

        info!("[BankQueue] {} calling {}", teller_name, ticket.id);

        if self.voice_enabled {
            let text = bank_call_text(&ticket.prefix, ticket.display_number, &teller_name);
            self.announcer.cancel();
            self.announcer.announce(&text);
        }

        Some(ticket)
    }

    /// Clear the teller's serving slot and archive the finished ticket.
    /// No-op when the teller is unknown or has no active service.
    pub fn complete_service(&mut self, teller_id: u32) -> Option<Ticket> {
        let Some(pos) = self.tellers.iter().position(|t| t.id == teller_id) else {
            warn!("[BankQueue] complete_service: unknown teller {}", teller_id);
            return None;
        };
        let Some(mut ticket) = self.tellers[pos].serving.take() else {
            debug!("[BankQueue] teller {} has no active service", teller_id);
            return None;
        };

        self.current_calls.retain(|c| c.teller_id != teller_id);
        ticket.status = TicketStatus::Completed;
        self.history.push(ticket.clone());

        info!(
            "[BankQueue] {} finished serving {}",
            self.tellers[pos].name, ticket.id
        );
        Some(ticket)
    }

    pub fn toggle_voice(&mut self) -> bool {
        self.voice_enabled = !self.voice_enabled;
        self.voice_enabled
    }

    pub fn voice_enabled(&self) -> bool {
        self.voice_enabled
    }

    pub fn total_waiting(&self) -> usize {
        self.queues.values().map(|q| q.len()).sum()
    }

    pub fn waiting_by_category(&self, category: ServiceCategory) -> usize {
        self.queues.get(&category).map_or(0, |q| q.len())
    }

    pub fn queue(&self, category: ServiceCategory) -> &VecDeque<Ticket> {
        // All four queues are created up front; an empty static queue
        // covers rosters built before a category existed.
        static EMPTY: VecDeque<Ticket> = VecDeque::new();
        self.queues.get(&category).unwrap_or(&EMPTY)
    }

    pub fn tellers(&self) -> &[Teller] {
        &self.tellers
    }

    pub fn current_calls(&self) -> &[ActiveCall] {
        &self.current_calls
    }

    pub fn history(&self) -> &[Ticket] {
        &self.history
    }
}

impl Default for BankQueue {
    fn default() -> Self {
        Self::new()
    }
}
