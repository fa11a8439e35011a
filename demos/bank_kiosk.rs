use ksim::core::bank::BankQueue;
use ksim::core::category::ServiceCategory;
use ksim::sim::bank::BankSimulation;
use ksim::sim::config::BankSimulationConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger with timestamps removed for cleaner output
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    println!("🏦 Starting Bank Queue Kiosk Simulation");

    let config = BankSimulationConfig::default().with_ticks(200);

    println!("Configuration:");
    println!("  Ticks: {}", config.ticks);
    println!(
        "  Action weights: take={}, call={}, complete={}",
        config.take_weight, config.call_weight, config.complete_weight
    );
    println!("  Random seed: {:?}", config.random_seed);
    println!();

    let mut bank = BankQueue::new();
    let mut sim = BankSimulation::new(config)?;

    sim.run(&mut bank);

    println!("\n✅ Simulation completed");
    println!("\n📊 SIMULATION RESULTS:");
    println!("======================");
    let stats = sim.stats();
    println!("Tickets issued:     {}", stats.tickets_issued);
    println!("Customers called:   {}", stats.calls_made);
    println!("Services completed: {}", stats.services_completed);

    println!("\nWaiting per category:");
    for category in ServiceCategory::ALL {
        println!(
            "  {:<18} {}",
            category.config().name,
            bank.waiting_by_category(category)
        );
    }

    println!("\nTeller status:");
    for teller in bank.tellers() {
        match &teller.serving {
            Some(ticket) => println!("  {:<20} serving {}", teller.name, ticket.id),
            None => println!("  {:<20} available", teller.name),
        }
    }

    println!("\nArchived services: {}", bank.history().len());

    Ok(())
}
