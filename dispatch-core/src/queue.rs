//! First-in, first-out staging of pending orders.

use std::collections::VecDeque;

use crate::Order;

/// Pending orders in arrival order.
///
/// Orders leave the queue only through [`OrderQueue::dequeue_next`], which
/// always yields the earliest order not yet taken.
///
/// # Examples
/// ```
/// use dispatch_core::{Order, OrderQueue};
///
/// let mut queue = OrderQueue::new();
/// queue.enqueue(Order::new("o-1", "North"));
/// queue.enqueue(Order::new("o-2", "South"));
///
/// assert_eq!(queue.dequeue_next(), Some(Order::new("o-1", "North")));
/// assert_eq!(queue.dequeue_next(), Some(Order::new("o-2", "South")));
/// assert_eq!(queue.dequeue_next(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQueue {
    orders: VecDeque<Order>,
}

impl OrderQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `order` to the tail.
    pub fn enqueue(&mut self, order: Order) {
        log::debug!(
            "enqueued order {} for {}",
            order.order_id,
            order.customer_location
        );
        self.orders.push_back(order);
    }

    /// Remove and return the oldest pending order.
    ///
    /// An empty queue yields `None` immediately; this is a normal outcome
    /// rather than an error.
    pub fn dequeue_next(&mut self) -> Option<Order> {
        let next = self.orders.pop_front();
        if let Some(order) = &next {
            log::debug!("dequeued order {}", order.order_id);
        }
        next
    }

    /// The oldest pending order, left in place.
    #[must_use]
    pub fn peek(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Number of pending orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether no orders are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Iterate over pending orders from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Copy of the pending orders from oldest to newest.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Order> {
        self.orders.iter().cloned().collect()
    }
}

impl Extend<Order> for OrderQueue {
    fn extend<I: IntoIterator<Item = Order>>(&mut self, iter: I) {
        for order in iter {
            self.enqueue(order);
        }
    }
}

impl FromIterator<Order> for OrderQueue {
    fn from_iter<I: IntoIterator<Item = Order>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
