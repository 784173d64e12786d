//! Test fixtures and data for monitor tests
//!
//! Provides consistent order data used across the unit and integration
//! suites.

use shared::{Item, ItemStatus, Order};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub fn item(description: &str, status: ItemStatus, notifications: u32) -> Item {
        Item {
            status,
            description: description.to_string(),
            delivery_notification: notifications,
        }
    }

    pub fn order(order_id: i64, items: Vec<Item>) -> Order {
        Order { order_id, items }
    }

    /// Order with a single delivered item and a zero notification counter.
    pub fn delivered_order(order_id: i64, description: &str) -> Order {
        Self::order(
            order_id,
            vec![Self::item(description, ItemStatus::Delivered, 0)],
        )
    }

    /// Two orders, each with one delivered item ("Item 1", "Item 2").
    pub fn two_delivered_orders() -> Vec<Order> {
        vec![
            Self::delivered_order(1, "Item 1"),
            Self::delivered_order(2, "Item 2"),
        ]
    }

    /// Two orders whose items are still in transit (Shipped / Processing).
    pub fn two_pending_orders() -> Vec<Order> {
        vec![
            Self::order(1, vec![Self::item("Item 1", ItemStatus::Shipped, 0)]),
            Self::order(2, vec![Self::item("Item 2", ItemStatus::Processing, 0)]),
        ]
    }
}
