use chrono::Utc;
use log::{debug, info, warn};

use crate::persist::mirror::HistoryMirror;
use crate::persist::store::QueuePersistence;

use super::announce::{order_ready_text, Announcer, LogAnnouncer};
use super::cart::Cart;
use super::menu::MenuItem;
use super::order::{HistoryRecord, Order, OrderItem, OrderStatus, SKIP_LIMIT_REASON};

/// Waiting-queue slot a deferred order is reinserted at, both by the
/// priority reorder pass and by the skip penalty.
const REINSERT_SLOT: usize = 2;

/// Skips before an order is evicted and archived as cancelled.
const SKIP_LIMIT: u32 = 2;

/// The restaurant order queue store: one flat order list with status
/// tags, a single ticket counter, the cart, and the order history.
///
/// The live list is driven by [`tick`], a global status machine that
/// performs at most one transition per call; at any moment at most
/// one order is being prepared.
///
/// [`tick`]: OrderQueue::tick
pub struct OrderQueue {
    orders: Vec<Order>,
    counter: u32,
    history: Vec<HistoryRecord>,
    cart: Cart,
    voice_enabled: bool,
    announcer: Box<dyn Announcer>,
    persistence: Option<QueuePersistence>,
    mirror: Option<Box<dyn HistoryMirror>>,
}

impl OrderQueue {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            counter: 1,
            history: Vec::new(),
            cart: Cart::default(),
            voice_enabled: true,
            announcer: Box::new(LogAnnouncer),
            persistence: None,
            mirror: None,
        }
    }

    /// Read-through construction: restore the live list, counter, and
    /// history from storage, then keep writing through to it.
    pub fn load_from(persistence: QueuePersistence) -> Self {
        let orders = persistence.load_queue_list();
        let counter = persistence.load_counter();
        let history = persistence.load_history();
        info!(
            "[OrderQueue] restored {} live orders, counter {}, {} history records",
            orders.len(),
            counter,
            history.len()
        );
        Self {
            orders,
            counter,
            history,
            cart: Cart::default(),
            voice_enabled: true,
            announcer: Box::new(LogAnnouncer),
            persistence: Some(persistence),
            mirror: None,
        }
    }

    pub fn with_announcer(mut self, announcer: Box<dyn Announcer>) -> Self {
        self.announcer = announcer;
        self
    }

    /// Attach a remote history mirror, merging any records it already
    /// holds. A fetch failure degrades to local-only operation.
    pub fn attach_mirror(&mut self, mirror: Box<dyn HistoryMirror>) {
        match mirror.fetch_all() {
            Ok(rows) => {
                for record in rows {
                    let number = record.order.queue_number;
                    if !self
                        .history
                        .iter()
                        .any(|r| r.order.queue_number == number)
                    {
                        self.history.push(record);
                    }
                }
            }
            Err(err) => {
                warn!(
                    "[OrderQueue] mirror fetch failed, continuing local-only: {}",
                    err
                );
            }
        }
        self.mirror = Some(mirror);
    }

    // ---- cart ----

    pub fn add_to_cart(&mut self, item: &MenuItem) {
        self.cart.add(item);
    }

    pub fn remove_from_cart(&mut self, item_id: u32) {
        self.cart.remove(item_id);
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    // ---- queue operations ----

    /// Turn the cart into a waiting order. Returns the minted queue
    /// number, or `None` when the cart is empty.
    pub fn submit_order(&mut self, customer_name: &str, payment_method: &str) -> Option<u32> {
        if self.cart.is_empty() {
            debug!("[OrderQueue] submit_order with empty cart");
            return None;
        }
        let items = self.cart.take_items();
        Some(self.enqueue_order(customer_name, items, payment_method))
    }

    /// Mint a waiting order from explicit items, bypassing the cart.
    pub fn enqueue_order(
        &mut self,
        customer_name: &str,
        items: Vec<OrderItem>,
        payment_method: &str,
    ) -> u32 {
        let number = self.counter;
        let order = Order::new(number, customer_name, items, payment_method);
        info!(
            "[OrderQueue] order #{} from {} ({} items)",
            number,
            customer_name,
            order.items.len()
        );
        self.orders.push(order);
        self.counter += 1;
        self.persist_queue();
        self.persist_counter();
        number
    }

    /// Manually move an order to a new status. Completion archives the
    /// order to history. Unknown queue numbers are a logged no-op.
    pub fn update_status(&mut self, queue_number: u32, status: OrderStatus) {
        let Some(pos) = self
            .orders
            .iter()
            .position(|o| o.queue_number == queue_number)
        else {
            warn!("[OrderQueue] update_status: unknown order #{}", queue_number);
            return;
        };
        self.orders[pos].status = status;
        if status == OrderStatus::Completed {
            let order = self.orders[pos].clone();
            self.archive(order, None);
        }
        self.persist_queue();
    }

    /// One step of the global status machine. At most one transition:
    ///
    /// 1. an order being prepared becomes ready (archived + announced);
    /// 2. else the waiting queue is priority-reordered and its head
    ///    starts preparing;
    /// 3. else ready orders are dropped from the live list.
    ///
    /// Ready orders are meant to linger for a while before being
    /// dropped, but no ready timestamp is tracked, so step 3 removes
    /// them immediately.
    pub fn tick(&mut self) {
        if let Some(pos) = self
            .orders
            .iter()
            .position(|o| o.status == OrderStatus::Preparing)
        {
            self.orders[pos].status = OrderStatus::Completed;
            let order = self.orders[pos].clone();
            info!("[OrderQueue] order #{} is ready", order.queue_number);
            self.archive(order.clone(), None);
            if self.voice_enabled {
                self.announcer.cancel();
                self.announcer
                    .announce(&order_ready_text(order.queue_number));
            }
            self.persist_queue();
            return;
        }

        if self
            .orders
            .iter()
            .any(|o| o.status == OrderStatus::Waiting)
        {
            self.reorder_waiting();
            if let Some(pos) = self
                .orders
                .iter()
                .position(|o| o.status == OrderStatus::Waiting)
            {
                self.orders[pos].status = OrderStatus::Preparing;
                info!(
                    "[OrderQueue] order #{} is now being prepared",
                    self.orders[pos].queue_number
                );
            }
            self.persist_queue();
            return;
        }

        let before = self.orders.len();
        self.orders.retain(|o| o.status != OrderStatus::Completed);
        if self.orders.len() != before {
            debug!(
                "[OrderQueue] dropped {} ready orders from the live list",
                before - self.orders.len()
            );
            self.persist_queue();
        }
    }

    /// Reorder the waiting set: orders without a main-course item keep
    /// arrival order at the front, and each main-course order is
    /// reinserted at slot `min(2, len)` instead of the tail. Positions
    /// of non-waiting orders in the flat list are untouched.
    pub fn reorder_waiting(&mut self) {
        let slots: Vec<usize> = self
            .orders
            .iter()
            .enumerate()
            .filter(|(_, o)| o.status == OrderStatus::Waiting)
            .map(|(i, _)| i)
            .collect();
        if slots.len() < 2 {
            return;
        }

        let waiting: Vec<Order> = slots.iter().map(|&i| self.orders[i].clone()).collect();
        let mut reordered: Vec<Order> = waiting
            .iter()
            .filter(|o| !o.has_primary_item())
            .cloned()
            .collect();
        for order in waiting.iter().filter(|o| o.has_primary_item()) {
            let at = REINSERT_SLOT.min(reordered.len());
            reordered.insert(at, order.clone());
        }

        for (slot, order) in slots.into_iter().zip(reordered) {
            self.orders[slot] = order;
        }
    }

    /// Announce a ready order for pickup and flag it as called.
    pub fn call_for_pickup(&mut self, queue_number: u32) {
        let Some(order) = self
            .orders
            .iter_mut()
            .find(|o| o.queue_number == queue_number)
        else {
            warn!("[OrderQueue] call_for_pickup: unknown order #{}", queue_number);
            return;
        };
        if order.status != OrderStatus::Completed {
            debug!("[OrderQueue] order #{} is not ready yet", queue_number);
            return;
        }
        order.called = true;
        let number = order.queue_number;
        if self.voice_enabled {
            self.announcer.cancel();
            self.announcer.announce(&order_ready_text(number));
        }
        self.persist_queue();
    }

    /// Defer a ready order whose customer did not show up. The first
    /// skip sends it back to waiting slot `min(2, len)`; the second
    /// evicts it and archives it as cancelled.
    pub fn skip(&mut self, queue_number: u32) {
        let Some(pos) = self
            .orders
            .iter()
            .position(|o| o.queue_number == queue_number)
        else {
            warn!("[OrderQueue] skip: unknown order #{}", queue_number);
            return;
        };
        if self.orders[pos].status != OrderStatus::Completed {
            warn!(
                "[OrderQueue] skip: order #{} is not ready for pickup",
                queue_number
            );
            return;
        }

        let mut order = self.orders.remove(pos);
        order.skip_count += 1;

        if order.skip_count >= SKIP_LIMIT {
            order.status = OrderStatus::Cancelled;
            info!(
                "[OrderQueue] order #{} skipped {} times, cancelling",
                queue_number, order.skip_count
            );
            self.archive(order, Some(SKIP_LIMIT_REASON.to_string()));
        } else {
            order.status = OrderStatus::Waiting;
            order.called = false;
            let waiting = self.waiting_count();
            let slot = REINSERT_SLOT.min(waiting);
            let at = self.flat_index_for_waiting_slot(slot);
            info!(
                "[OrderQueue] order #{} skipped, back to waiting slot {}",
                queue_number, slot
            );
            self.orders.insert(at, order);
        }
        self.persist_queue();
    }

    /// Cancel a waiting or in-preparation order and archive it with
    /// the given reason.
    pub fn cancel_order(&mut self, queue_number: u32, reason: &str) {
        let Some(pos) = self
            .orders
            .iter()
            .position(|o| o.queue_number == queue_number)
        else {
            warn!("[OrderQueue] cancel_order: unknown order #{}", queue_number);
            return;
        };
        let status = self.orders[pos].status;
        if status != OrderStatus::Waiting && status != OrderStatus::Preparing {
            warn!(
                "[OrderQueue] cancel_order: order #{} already settled",
                queue_number
            );
            return;
        }

        let mut order = self.orders.remove(pos);
        order.status = OrderStatus::Cancelled;
        info!("[OrderQueue] order #{} cancelled: {}", queue_number, reason);
        self.archive(order, Some(reason.to_string()));
        self.persist_queue();
    }

    /// Reset the store: live list, counter, history, and cart, plus
    /// the persisted keys and the mirror table.
    pub fn clear_all(&mut self) {
        self.orders.clear();
        self.counter = 1;
        self.history.clear();
        self.cart.clear();
        if let Some(persistence) = self.persistence.as_mut() {
            persistence.clear_all();
        }
        if let Some(mirror) = self.mirror.as_mut() {
            if let Err(err) = mirror.clear_all() {
                warn!("[OrderQueue] mirror clear failed: {}", err);
            }
        }
        info!("[OrderQueue] all data cleared");
    }

    pub fn toggle_voice(&mut self) -> bool {
        self.voice_enabled = !self.voice_enabled;
        self.voice_enabled
    }

    // ---- views ----

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    pub fn waiting_orders(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| o.status == OrderStatus::Waiting)
            .collect()
    }

    pub fn waiting_count(&self) -> usize {
        self.orders
            .iter()
            .filter(|o| o.status == OrderStatus::Waiting)
            .count()
    }

    pub fn preparing_order(&self) -> Option<&Order> {
        self.orders
            .iter()
            .find(|o| o.status == OrderStatus::Preparing)
    }

    pub fn completed_orders(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .collect()
    }

    // ---- internals ----

    /// Archive an order to history. A record for the same queue number
    /// is replaced rather than duplicated, so a skip-cancel overrides
    /// the earlier ready archive.
    fn archive(&mut self, order: Order, cancel_reason: Option<String>) {
        let record = HistoryRecord {
            order,
            completed_at: Utc::now(),
            cancel_reason,
        };
        let number = record.order.queue_number;
        match self
            .history
            .iter()
            .position(|r| r.order.queue_number == number)
        {
            Some(pos) => {
                debug!("[OrderQueue] replacing history entry for #{}", number);
                self.history[pos] = record.clone();
            }
            None => self.history.push(record.clone()),
        }
        self.persist_history();

        if let Some(mirror) = self.mirror.as_mut() {
            if let Err(err) = mirror.insert(&record) {
                warn!("[OrderQueue] mirror insert failed: {}", err);
            }
        }
    }

    /// Flat-list index corresponding to the given waiting-queue slot.
    fn flat_index_for_waiting_slot(&self, slot: usize) -> usize {
        let mut seen = 0;
        for (index, order) in self.orders.iter().enumerate() {
            if order.status == OrderStatus::Waiting {
                if seen == slot {
                    return index;
                }
                seen += 1;
            }
        }
        self.orders.len()
    }

    fn persist_queue(&mut self) {
        if let Some(persistence) = self.persistence.as_mut() {
            persistence.save_queue_list(&self.orders);
        }
    }

    fn persist_counter(&mut self) {
        if let Some(persistence) = self.persistence.as_mut() {
            persistence.save_counter(self.counter);
        }
    }

    fn persist_history(&mut self) {
        if let Some(persistence) = self.persistence.as_mut() {
            persistence.save_history(&self.history);
        }
    }
}

impl Default for OrderQueue {
    fn default() -> Self {
        Self::new()
    }
}
