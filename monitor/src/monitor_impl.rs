//! Order monitor implementation with dependency injection

use tracing::info;

use shared::{ItemStatus, Order};

use crate::traits::OrderProvider;

/// Order monitor with an injected provider.
pub struct OrderMonitor<P>
where
    P: OrderProvider,
{
    provider: P,
}

impl<P> OrderMonitor<P>
where
    P: OrderProvider,
{
    /// Create a new monitor around the given provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Run one processing pass: fetch all orders, alert on every delivered
    /// item, and push each order back for further processing.
    ///
    /// The pass itself cannot fail; every remote-call failure is absorbed
    /// and logged inside the provider.
    pub async fn monitor_orders(&self) {
        info!("Start of App");

        let orders = self.provider.fetch_orders().await;
        for mut order in orders {
            self.process_order(&mut order).await;
            self.provider.submit_order_update(&order).await;
        }

        info!("Results sent to relevant APIs.");
    }

    /// Alert on each delivered item of the order and bump its notification
    /// counter. Alerts are awaited one at a time so the increments stay in
    /// encounter order.
    async fn process_order(&self, order: &mut Order) {
        let order_id = order.order_id;
        for item in &mut order.items {
            if item.status == ItemStatus::Delivered {
                // The alert message carries the pre-increment count.
                self.provider.send_delivery_alert(item, order_id).await;
                item.delivery_notification += 1;
            }
        }
    }
}
