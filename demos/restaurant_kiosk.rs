use ksim::core::restaurant::OrderQueue;
use ksim::persist::backend::FileBackend;
use ksim::persist::mirror::MemoryMirror;
use ksim::persist::store::QueuePersistence;
use ksim::sim::config::RestaurantSimulationConfig;
use ksim::sim::restaurant::{RestaurantSimulation, AUTO_CANCEL_REASON};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger with timestamps removed for cleaner output
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    println!("🍜 Starting Restaurant Queue Kiosk Simulation");

    let config = RestaurantSimulationConfig::default();

    println!("Configuration:");
    println!("  Queue numbers: 1..={}", config.max_queue_number);
    println!(
        "  Initial waiting: {}, refill batch: {}",
        config.initial_waiting, config.refill_batch
    );
    println!("  Auto cancel chance: {}%", config.auto_cancel_chance);
    println!(
        "  Items per order: mean={:.1}, std_dev={:.1}",
        config.item_count_mean, config.item_count_std_dev
    );
    println!("  Random seed: {:?}", config.random_seed);
    println!();

    // Persist under the system temp dir; fall back to in-memory state
    // when the directory cannot be created.
    let data_dir = std::env::temp_dir().join("restaurant_kiosk");
    let mut queue = match FileBackend::new(&data_dir) {
        Ok(backend) => {
            println!("Persisting queue state under {}", data_dir.display());
            OrderQueue::load_from(QueuePersistence::new(Box::new(backend)))
        }
        Err(err) => {
            log::warn!("persistence unavailable ({}), running in-memory", err);
            OrderQueue::new()
        }
    };
    queue.clear_all();
    queue.attach_mirror(Box::new(MemoryMirror::default()));

    let mut sim = RestaurantSimulation::new(config)?;
    sim.seed_initial(&mut queue);

    for _ in 0..10_000 {
        if sim.is_finished(&queue) {
            break;
        }
        sim.step(&mut queue);
    }

    println!("\n✅ Simulation completed");
    println!("\n📊 SIMULATION RESULTS:");
    println!("======================");
    let stats = sim.stats();
    println!("Orders generated: {}", stats.orders_generated);
    println!("Orders completed: {}", stats.orders_completed);
    println!("Orders cancelled: {}", stats.orders_cancelled);

    let auto_cancels = queue
        .history()
        .iter()
        .filter(|r| r.cancel_reason.as_deref() == Some(AUTO_CANCEL_REASON))
        .count();
    println!("  of which auto-cancelled: {}", auto_cancels);
    println!("History records:  {}", queue.history().len());

    let revenue: u64 = queue
        .history()
        .iter()
        .filter(|r| r.cancel_reason.is_none())
        .map(|r| r.order.total() as u64)
        .sum();
    println!("Revenue from completed orders: Rp{}", revenue);

    Ok(())
}
