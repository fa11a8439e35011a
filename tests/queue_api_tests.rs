use ksim::core::bank::BankQueue;
use ksim::core::category::ServiceCategory;
use ksim::core::menu::{menu_data, MenuCategory};
use ksim::core::order::{OrderItem, OrderStatus, SKIP_LIMIT_REASON};
use ksim::core::restaurant::OrderQueue;
use ksim::core::ticket::TicketStatus;
use ksim::persist::backend::FileBackend;
use ksim::persist::store::QueuePersistence;
use ksim::sim::config::RestaurantSimulationConfig;
use ksim::sim::restaurant::RestaurantSimulation;

fn quick_items() -> Vec<OrderItem> {
    let menu = menu_data();
    let drink = menu
        .iter()
        .find(|m| m.category == MenuCategory::Drinks)
        .expect("menu has drinks");
    vec![OrderItem::from_menu(drink, 1)]
}

fn main_course_items() -> Vec<OrderItem> {
    let menu = menu_data();
    let main_course = menu
        .iter()
        .find(|m| m.category == MenuCategory::MainCourse)
        .expect("menu has main courses");
    vec![OrderItem::from_menu(main_course, 1)]
}

#[test]
fn bank_ticket_numbers_have_no_gaps() {
    let mut bank = BankQueue::new();
    for category in ServiceCategory::ALL {
        for expected in 1..=10u32 {
            let issued = bank.take_ticket(category);
            assert_eq!(issued.ticket.display_number, expected);
            assert_eq!(
                issued.ticket.id,
                format!("{}{:03}", category.config().prefix, expected)
            );
        }
    }
    assert_eq!(bank.total_waiting(), 40);
}

#[test]
fn bank_teller_scenario_t001_through_t003() {
    let mut bank = BankQueue::new();
    let ids: Vec<String> = (0..3)
        .map(|_| bank.take_ticket(ServiceCategory::Teller).ticket.id)
        .collect();
    assert_eq!(ids, vec!["T001", "T002", "T003"]);

    let called = bank.call_next(1).expect("queue nonempty");
    assert_eq!(called.id, "T001");
    let remaining: Vec<&str> = bank
        .queue(ServiceCategory::Teller)
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(remaining, vec!["T002", "T003"]);

    bank.complete_service(1);
    assert!(bank.tellers()[0].serving.is_none());
    // T001 is archived, never re-enqueued.
    assert_eq!(bank.waiting_by_category(ServiceCategory::Teller), 2);
    assert_eq!(bank.history().len(), 1);
    assert_eq!(bank.history()[0].id, "T001");
    assert_eq!(bank.history()[0].status, TicketStatus::Completed);
}

#[test]
fn bank_tellers_never_share_a_serving_slot() {
    let mut bank = BankQueue::new();
    for _ in 0..4 {
        bank.take_ticket(ServiceCategory::Teller);
    }

    let first = bank.call_next(1).expect("call 1");
    let second = bank.call_next(2).expect("call 2");
    assert_ne!(first.id, second.id);

    // Each teller holds exactly one ticket until it completes.
    assert!(bank.call_next(1).is_none());
    bank.complete_service(1);
    let third = bank.call_next(1).expect("call 3");
    assert_ne!(third.id, second.id);
}

#[test]
fn restaurant_priority_reorder_scenario() {
    // Order #3 carries a main course and waits behind two quick
    // orders: one reorder pass leaves it at waiting index 2, not 0.
    let mut queue = OrderQueue::new();
    queue.enqueue_order("Quick 1", quick_items(), "cash");
    queue.enqueue_order("Quick 2", quick_items(), "cash");
    queue.enqueue_order("Heavy", main_course_items(), "cash");

    queue.reorder_waiting();
    let waiting: Vec<u32> = queue.waiting_orders().iter().map(|o| o.queue_number).collect();
    assert_eq!(waiting, vec![1, 2, 3]);
    assert_eq!(waiting[2], 3);
}

#[test]
fn restaurant_skip_scenario() {
    let mut queue = OrderQueue::new();
    queue.enqueue_order("Target", quick_items(), "cash"); // #1
    queue.tick(); // preparing
    queue.tick(); // ready
    for name in ["W1", "W2", "W3"] {
        queue.enqueue_order(name, quick_items(), "cash");
    }

    // First skip: back to waiting at slot min(2, len).
    queue.skip(1);
    let target = queue
        .orders()
        .iter()
        .find(|o| o.queue_number == 1)
        .expect("still live");
    assert_eq!(target.status, OrderStatus::Waiting);
    assert_eq!(target.skip_count, 1);
    let waiting: Vec<u32> = queue.waiting_orders().iter().map(|o| o.queue_number).collect();
    assert_eq!(waiting[2], 1);

    // Work #1 back to ready, then skip again: evicted for good.
    while queue
        .orders()
        .iter()
        .any(|o| o.queue_number == 1 && o.status != OrderStatus::Completed)
    {
        queue.tick();
    }
    queue.skip(1);

    assert!(queue.orders().iter().all(|o| o.queue_number != 1));
    let record = queue
        .history()
        .iter()
        .find(|r| r.order.queue_number == 1)
        .expect("archived as cancelled");
    assert_eq!(record.cancel_reason.as_deref(), Some(SKIP_LIMIT_REASON));
    assert_eq!(record.order.status, OrderStatus::Cancelled);
}

#[test]
fn restaurant_state_round_trips_through_storage() {
    let dir = tempfile::tempdir().expect("tempdir");

    let (live_numbers, counter, history_numbers) = {
        let backend = FileBackend::new(dir.path()).expect("backend");
        let mut queue = OrderQueue::load_from(QueuePersistence::new(Box::new(backend)));
        for name in ["Alice", "Bob", "Carol"] {
            queue.enqueue_order(name, quick_items(), "QRIS");
        }
        queue.tick(); // #1 preparing
        queue.tick(); // #1 completed + archived

        let live: Vec<(u32, OrderStatus)> = queue
            .orders()
            .iter()
            .map(|o| (o.queue_number, o.status))
            .collect();
        let history: Vec<u32> = queue.history().iter().map(|r| r.order.queue_number).collect();
        (live, queue.counter(), history)
    };

    // Reload from the same directory: identical state.
    let backend = FileBackend::new(dir.path()).expect("reopen");
    let restored = OrderQueue::load_from(QueuePersistence::new(Box::new(backend)));

    let restored_live: Vec<(u32, OrderStatus)> = restored
        .orders()
        .iter()
        .map(|o| (o.queue_number, o.status))
        .collect();
    let restored_history: Vec<u32> = restored
        .history()
        .iter()
        .map(|r| r.order.queue_number)
        .collect();

    assert_eq!(restored_live, live_numbers);
    assert_eq!(restored.counter(), counter);
    assert_eq!(restored_history, history_numbers);

    // The restored counter keeps minting without repeats.
    let mut restored = restored;
    let next = restored.enqueue_order("Dave", quick_items(), "cash");
    assert_eq!(next, counter);
}

#[test]
fn restaurant_clear_all_wipes_storage() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let backend = FileBackend::new(dir.path()).expect("backend");
        let mut queue = OrderQueue::load_from(QueuePersistence::new(Box::new(backend)));
        queue.enqueue_order("Alice", quick_items(), "cash");
        queue.clear_all();
    }
    let backend = FileBackend::new(dir.path()).expect("reopen");
    let restored = OrderQueue::load_from(QueuePersistence::new(Box::new(backend)));
    assert!(restored.orders().is_empty());
    assert_eq!(restored.counter(), 1);
    assert!(restored.history().is_empty());
}

#[test]
fn restaurant_simulation_settles_every_order() {
    let config = RestaurantSimulationConfig::new()
        .with_max_queue_number(25)
        .with_random_seed(Some(3));
    let mut queue = OrderQueue::new();
    let mut sim = RestaurantSimulation::new(config).expect("valid config");
    sim.seed_initial(&mut queue);

    for _ in 0..10_000 {
        if sim.is_finished(&queue) {
            break;
        }
        sim.step(&mut queue);
    }

    assert!(sim.is_finished(&queue));
    let stats = sim.stats();
    assert_eq!(stats.orders_generated, 25);
    assert_eq!(stats.orders_completed + stats.orders_cancelled, 25);
    assert_eq!(queue.history().len(), 25);
    // Queue numbers 1..=25 all appear exactly once in history.
    let mut numbers: Vec<u32> = queue.history().iter().map(|r| r.order.queue_number).collect();
    numbers.sort_unstable();
    assert_eq!(numbers, (1..=25).collect::<Vec<u32>>());
}
