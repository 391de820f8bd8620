//! The kitchen display: active orders, highest priority first, oldest first within a
//! priority.

use super::aging::{elapsed_label, elapsed_minutes, AgingBand, AgingPolicy};
use crate::framework::Subscription;
use crate::model::{Order, OrderStatus};
use crate::order_actor::OrderError;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Sorts the active (not yet delivered) orders into kitchen order.
///
/// Keys: priority rank (absent counts as normal), then creation time, then id so that the
/// result is fully determined by the input set.
pub fn project<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Vec<Order> {
    let mut queue: Vec<Order> = orders
        .into_iter()
        .filter(|order| order.status.is_active())
        .cloned()
        .collect();
    queue.sort_by(|a, b| {
        a.effective_priority()
            .rank()
            .cmp(&b.effective_priority().rank())
            .then(a.created_at.cmp(&b.created_at))
            .then(a.id.cmp(&b.id))
    });
    queue
}

/// Status tabs on the kitchen screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueueFilter {
    #[default]
    All,
    Pending,
    Preparing,
}

impl QueueFilter {
    pub fn accepts(self, status: OrderStatus) -> bool {
        match self {
            QueueFilter::All => true,
            QueueFilter::Pending => status == OrderStatus::Pending,
            QueueFilter::Preparing => status == OrderStatus::Preparing,
        }
    }
}

/// Header counters for the kitchen screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub pending: usize,
    pub preparing: usize,
    pub ready: usize,
}

impl StatusCounts {
    pub fn of<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        orders
            .into_iter()
            .fold(StatusCounts::default(), |mut counts, order| {
                match order.status {
                    OrderStatus::Pending => counts.pending += 1,
                    OrderStatus::Preparing => counts.preparing += 1,
                    OrderStatus::Ready => counts.ready += 1,
                    OrderStatus::Delivered => {}
                }
                counts
            })
    }

    pub fn total(&self) -> usize {
        self.pending + self.preparing + self.ready
    }
}

/// One order as shown on the display, with its age computed for a given instant.
#[derive(Debug, Clone, PartialEq)]
pub struct KitchenTicket {
    pub order: Order,
    pub elapsed_minutes: u64,
    pub band: AgingBand,
}

impl KitchenTicket {
    pub fn new(order: Order, policy: &AgingPolicy, now: DateTime<Utc>) -> Self {
        let elapsed = elapsed_minutes(order.created_at, now);
        let band = policy.band(elapsed, order.prep_minutes);
        Self {
            order,
            elapsed_minutes: elapsed,
            band,
        }
    }

    pub fn elapsed_label(&self) -> String {
        elapsed_label(self.elapsed_minutes)
    }
}

/// Live kitchen queue backed by an order subscription.
///
/// Nothing is cached between calls: every read re-projects the latest collection the store
/// has published.
pub struct KitchenQueue {
    orders: Subscription<Order>,
    policy: AgingPolicy,
}

impl KitchenQueue {
    pub fn new(orders: Subscription<Order>, policy: AgingPolicy) -> Self {
        Self { orders, policy }
    }

    /// The current queue.
    pub fn snapshot(&self) -> Vec<Order> {
        project(self.orders.borrow().iter())
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts::of(self.orders.borrow().iter())
    }

    /// Waits until the order collection changes.
    ///
    /// Fails once the order store has shut down.
    pub async fn changed(&mut self) -> Result<(), OrderError> {
        self.orders
            .changed()
            .await
            .map_err(|_| OrderError::Persistence("order store closed".to_string()))?;
        debug!(size = self.orders.borrow().len(), "Kitchen queue refreshed");
        Ok(())
    }

    /// Tickets for display at `now`, restricted to one status tab.
    pub fn board(&self, now: DateTime<Utc>, filter: QueueFilter) -> Vec<KitchenTicket> {
        self.snapshot()
            .into_iter()
            .filter(|order| filter.accepts(order.status))
            .map(|order| KitchenTicket::new(order, &self.policy, now))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderCreate, OrderId, Priority};
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use tokio::sync::watch;

    fn order(id: u32, minute: u32, priority: Option<Priority>, status: OrderStatus) -> Order {
        let mut order = Order::new(
            OrderId(id),
            OrderCreate::new("Kottu", Decimal::from(100)),
            Utc.with_ymd_and_hms(2024, 5, 1, 10, minute, 0).unwrap(),
        );
        order.priority = priority;
        order.status = status;
        order
    }

    fn ids(orders: &[Order]) -> Vec<u32> {
        orders.iter().map(|o| o.id.0).collect()
    }

    #[test]
    fn priority_dominates_creation_time() {
        let a = order(1, 5, Some(Priority::High), OrderStatus::Pending);
        let b = order(2, 0, Some(Priority::Normal), OrderStatus::Pending);
        assert_eq!(ids(&project([&b, &a])), vec![1, 2]);
    }

    #[test]
    fn absent_priority_sorts_as_normal() {
        let low = order(1, 0, Some(Priority::Low), OrderStatus::Pending);
        let untagged = order(2, 10, None, OrderStatus::Pending);
        let normal = order(3, 5, Some(Priority::Normal), OrderStatus::Preparing);
        assert_eq!(ids(&project([&low, &untagged, &normal])), vec![3, 2, 1]);
    }

    #[test]
    fn delivered_orders_leave_the_queue() {
        let done = order(1, 0, Some(Priority::High), OrderStatus::Delivered);
        let ready = order(2, 0, None, OrderStatus::Ready);
        assert_eq!(ids(&project([&done, &ready])), vec![2]);
    }

    #[test]
    fn equal_keys_fall_back_to_id() {
        let first = order(4, 0, None, OrderStatus::Pending);
        let second = order(2, 0, None, OrderStatus::Pending);
        assert_eq!(ids(&project([&first, &second])), vec![2, 4]);
    }

    #[test]
    fn counts_and_filters() {
        let orders = [
            order(1, 0, None, OrderStatus::Pending),
            order(2, 0, None, OrderStatus::Preparing),
            order(3, 0, None, OrderStatus::Preparing),
            order(4, 0, None, OrderStatus::Ready),
            order(5, 0, None, OrderStatus::Delivered),
        ];
        let counts = StatusCounts::of(orders.iter());
        assert_eq!(
            counts,
            StatusCounts {
                pending: 1,
                preparing: 2,
                ready: 1
            }
        );
        assert_eq!(counts.total(), 4);
        assert!(QueueFilter::Preparing.accepts(OrderStatus::Preparing));
        assert!(!QueueFilter::Pending.accepts(OrderStatus::Ready));
    }

    #[tokio::test]
    async fn board_reflects_latest_published_collection() {
        let (tx, rx) = watch::channel(Arc::new(vec![order(1, 0, None, OrderStatus::Pending)]));
        let mut queue = KitchenQueue::new(rx, AgingPolicy::default());
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 20, 0).unwrap();

        let board = queue.board(now, QueueFilter::All);
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].elapsed_minutes, 20);
        assert_eq!(board[0].band, AgingBand::AtRisk);
        assert_eq!(board[0].elapsed_label(), "20m");

        tx.send_replace(Arc::new(vec![
            order(1, 0, None, OrderStatus::Preparing),
            order(2, 1, Some(Priority::High), OrderStatus::Pending),
        ]));
        queue.changed().await.unwrap();
        assert_eq!(ids(&queue.snapshot()), vec![2, 1]);
        assert_eq!(queue.board(now, QueueFilter::Pending).len(), 1);

        drop(tx);
        assert!(queue.changed().await.is_err());
    }
}
