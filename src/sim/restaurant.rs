use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::core::menu::menu_data;
use crate::core::order::OrderItem;
use crate::core::restaurant::OrderQueue;

use super::config::RestaurantSimulationConfig;

/// Cancel reason stamped on orders the driver aborts mid-preparation.
pub const AUTO_CANCEL_REASON: &str = "auto-cancelled by system";

const CUSTOMER_NAMES: [&str; 15] = [
    "Budi Santoso",
    "Siti Nurhaliza",
    "Andi Wijaya",
    "Dewi Lestari",
    "Rudi Hartono",
    "Maya Sari",
    "Joko Widodo",
    "Rina Susanti",
    "Doni Pratama",
    "Lisa Anggraeni",
    "Agus Setiawan",
    "Nina Kartika",
    "Hadi Gunawan",
    "Tina Marlina",
    "Eko Prasetyo",
];

const PAYMENT_METHODS: [&str; 7] = [
    "Tunai",
    "Debit Card",
    "Credit Card",
    "QRIS",
    "GoPay",
    "OVO",
    "Dana",
];

#[derive(Debug, Default, Clone)]
pub struct RestaurantSimulationStats {
    pub orders_generated: u64,
    pub orders_completed: u64,
    pub orders_cancelled: u64,
}

/// Driver that walks the restaurant queue through numbers 1..=max:
/// whatever is cooking either finishes or is randomly cancelled, the
/// waiting head advances, and fresh random orders top the queue up.
pub struct RestaurantSimulation {
    config: RestaurantSimulationConfig,
    rng: StdRng,
    generated: u32,
    stats: RestaurantSimulationStats,
}

impl RestaurantSimulation {
    pub fn new(config: RestaurantSimulationConfig) -> Result<Self, String> {
        config.validate()?;
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            rng,
            generated: 0,
            stats: RestaurantSimulationStats::default(),
        })
    }

    /// Fill the queue with the configured number of starting orders.
    pub fn seed_initial(&mut self, queue: &mut OrderQueue) {
        for _ in 0..self.config.initial_waiting {
            if self.generated >= self.config.max_queue_number {
                break;
            }
            self.generate_order(queue);
        }
    }

    /// One driver step: settle the in-flight order, advance the queue,
    /// or top it up with fresh orders.
    pub fn step(&mut self, queue: &mut OrderQueue) {
        if let Some(number) = queue.preparing_order().map(|o| o.queue_number) {
            if self.rng.gen_range(0..100) < self.config.auto_cancel_chance {
                queue.cancel_order(number, AUTO_CANCEL_REASON);
                self.stats.orders_cancelled += 1;
            } else {
                // The store's status machine completes and announces it.
                queue.tick();
                self.stats.orders_completed += 1;
            }
            return;
        }

        if queue.waiting_count() > 0 {
            queue.tick();
            return;
        }

        if self.generated < self.config.max_queue_number {
            let remaining = self.config.max_queue_number - self.generated;
            let batch = self.config.refill_batch.min(remaining);
            debug!("[RestaurantSimulation] refilling queue with {} orders", batch);
            for _ in 0..batch {
                self.generate_order(queue);
            }
        }
    }

    /// Whether every queue number has been generated and settled.
    pub fn is_finished(&self, queue: &OrderQueue) -> bool {
        self.generated >= self.config.max_queue_number
            && queue.preparing_order().is_none()
            && queue.waiting_count() == 0
    }

    pub fn stats(&self) -> &RestaurantSimulationStats {
        &self.stats
    }

    fn generate_order(&mut self, queue: &mut OrderQueue) {
        let menu = menu_data();
        let item_count = self.sample_item_count();
        let items: Vec<OrderItem> = (0..item_count)
            .filter_map(|_| {
                menu.choose(&mut self.rng).map(|menu_item| {
                    let quantity = self.rng.gen_range(1..=self.config.max_item_quantity);
                    OrderItem::from_menu(menu_item, quantity)
                })
            })
            .collect();

        let name = CUSTOMER_NAMES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("Guest");
        let payment = PAYMENT_METHODS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("Tunai");

        queue.enqueue_order(name, items, payment);
        self.generated += 1;
        self.stats.orders_generated += 1;
    }

    fn sample_item_count(&mut self) -> u32 {
        let sampled = match Normal::new(self.config.item_count_mean, self.config.item_count_std_dev)
        {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(_) => self.config.item_count_mean,
        };
        (sampled.round() as i64).clamp(1, 3) as u32
    }
}
