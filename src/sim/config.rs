use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankSimulationConfig {
    /// Number of simulation steps to run.
    pub ticks: u64,
    /// Relative chance of issuing a new ticket.
    pub take_weight: f64,
    /// Relative chance of a free teller calling the next customer.
    pub call_weight: f64,
    /// Relative chance of a busy teller finishing a service.
    pub complete_weight: f64,
    pub random_seed: Option<u64>,
}

impl Default for BankSimulationConfig {
    fn default() -> Self {
        Self {
            ticks: 100,
            take_weight: 0.4,
            call_weight: 0.3,
            complete_weight: 0.3,
            random_seed: Some(42),
        }
    }
}

impl BankSimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ticks(mut self, ticks: u64) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn with_weights(mut self, take: f64, call: f64, complete: f64) -> Self {
        self.take_weight = take;
        self.call_weight = call;
        self.complete_weight = complete;
        self
    }

    pub fn with_random_seed(mut self, seed: Option<u64>) -> Self {
        self.random_seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.ticks == 0 {
            return Err("Tick count must be greater than 0".to_string());
        }
        if self.take_weight < 0.0 || self.call_weight < 0.0 || self.complete_weight < 0.0 {
            return Err("Action weights cannot be negative".to_string());
        }
        if self.take_weight + self.call_weight + self.complete_weight <= 0.0 {
            return Err("At least one action weight must be positive".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantSimulationConfig {
    /// Highest queue number the driver will generate.
    pub max_queue_number: u32,
    /// Orders seeded into the queue before the run starts.
    pub initial_waiting: u32,
    /// Orders generated per refill once the queue runs dry.
    pub refill_batch: u32,
    /// Percent chance an in-flight order is cancelled instead of
    /// completed.
    pub auto_cancel_chance: u32,
    /// Mean and spread of the per-order item count.
    pub item_count_mean: f64,
    pub item_count_std_dev: f64,
    /// Highest quantity per item line.
    pub max_item_quantity: u32,
    pub random_seed: Option<u64>,
}

impl Default for RestaurantSimulationConfig {
    fn default() -> Self {
        Self {
            max_queue_number: 100,
            initial_waiting: 8,
            refill_batch: 5,
            auto_cancel_chance: 15,
            item_count_mean: 2.0,
            item_count_std_dev: 0.5,
            max_item_quantity: 3,
            random_seed: Some(42),
        }
    }
}

impl RestaurantSimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_queue_number(mut self, max: u32) -> Self {
        self.max_queue_number = max;
        self
    }

    pub fn with_initial_waiting(mut self, count: u32) -> Self {
        self.initial_waiting = count;
        self
    }

    pub fn with_auto_cancel_chance(mut self, percent: u32) -> Self {
        self.auto_cancel_chance = percent;
        self
    }

    pub fn with_item_count_distribution(mut self, mean: f64, std_dev: f64) -> Self {
        self.item_count_mean = mean;
        self.item_count_std_dev = std_dev;
        self
    }

    pub fn with_random_seed(mut self, seed: Option<u64>) -> Self {
        self.random_seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_queue_number == 0 {
            return Err("Max queue number must be greater than 0".to_string());
        }
        if self.refill_batch == 0 {
            return Err("Refill batch must be at least 1".to_string());
        }
        if self.auto_cancel_chance > 100 {
            return Err("Auto cancel chance is a percentage (0-100)".to_string());
        }
        if self.item_count_mean <= 0.0 {
            return Err("Item count mean must be positive".to_string());
        }
        if self.item_count_std_dev < 0.0 {
            return Err("Item count std dev cannot be negative".to_string());
        }
        if self.max_item_quantity == 0 {
            return Err("Item quantity must be at least 1".to_string());
        }
        Ok(())
    }
}
