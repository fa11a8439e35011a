use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::core::bank::BankQueue;
use crate::core::category::ServiceCategory;

use super::config::BankSimulationConfig;

#[derive(Debug, Default, Clone)]
pub struct BankSimulationStats {
    pub tickets_issued: u64,
    pub calls_made: u64,
    pub services_completed: u64,
}

/// Random driver emulating customers and tellers: each step draws one
/// action (take a ticket, call the next customer at a free teller, or
/// finish a running service).
pub struct BankSimulation {
    config: BankSimulationConfig,
    rng: StdRng,
    stats: BankSimulationStats,
}

impl BankSimulation {
    pub fn new(config: BankSimulationConfig) -> Result<Self, String> {
        config.validate()?;
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            rng,
            stats: BankSimulationStats::default(),
        })
    }

    /// Perform one random action against the store.
    pub fn step(&mut self, bank: &mut BankQueue) {
        let total = self.config.take_weight + self.config.call_weight + self.config.complete_weight;
        let draw = self.rng.gen::<f64>() * total;

        if draw < self.config.take_weight {
            self.take_random_ticket(bank);
        } else if draw < self.config.take_weight + self.config.call_weight {
            self.call_next_at_random_teller(bank);
        } else {
            self.complete_random_service(bank);
        }
    }

    /// Run the configured number of steps.
    pub fn run(&mut self, bank: &mut BankQueue) {
        for _ in 0..self.config.ticks {
            self.step(bank);
        }
    }

    pub fn stats(&self) -> &BankSimulationStats {
        &self.stats
    }

    fn take_random_ticket(&mut self, bank: &mut BankQueue) {
        let category = ServiceCategory::ALL[self.rng.gen_range(0..ServiceCategory::ALL.len())];
        let issued = bank.take_ticket(category);
        self.stats.tickets_issued += 1;
        debug!(
            "[BankSimulation] generated ticket {} for {}",
            issued.ticket.id, category
        );
    }

    fn call_next_at_random_teller(&mut self, bank: &mut BankQueue) {
        let candidates: Vec<u32> = bank
            .tellers()
            .iter()
            .filter(|t| t.is_idle() && bank.waiting_by_category(t.category) > 0)
            .map(|t| t.id)
            .collect();
        let Some(&teller_id) = candidates.choose(&mut self.rng) else {
            debug!("[BankSimulation] no free teller with a waiting queue");
            return;
        };
        if bank.call_next(teller_id).is_some() {
            self.stats.calls_made += 1;
        }
    }

    fn complete_random_service(&mut self, bank: &mut BankQueue) {
        let busy: Vec<u32> = bank
            .tellers()
            .iter()
            .filter(|t| t.serving.is_some())
            .map(|t| t.id)
            .collect();
        let Some(&teller_id) = busy.choose(&mut self.rng) else {
            debug!("[BankSimulation] no teller is serving");
            return;
        };
        if bank.complete_service(teller_id).is_some() {
            self.stats.services_completed += 1;
        }
    }
}
