//! Monitor trait definitions for dependency injection

use async_trait::async_trait;

use shared::{Item, Order};

/// Access to the three remote order APIs.
///
/// All operations absorb their own failures: implementations log the error
/// and fall back to a safe default, so a failed remote call never aborts a
/// processing pass.
#[mockall::automock]
#[async_trait]
pub trait OrderProvider: Send + Sync {
    /// Fetch the current medical equipment orders.
    ///
    /// Returns an empty list when the call fails for any reason (transport
    /// error, non-success status, undecodable body).
    async fn fetch_orders(&self) -> Vec<Order>;

    /// Post a delivery alert for an item of the given order.
    async fn send_delivery_alert(&self, item: &Item, order_id: i64);

    /// Push a (possibly updated) order back to the update API.
    async fn submit_order_update(&self, order: &Order);
}
