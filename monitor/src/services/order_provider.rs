//! HTTP order provider backed by the configured endpoint set

use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info};

use shared::{ApiEndpoints, Item, Order};

use crate::error::{MonitorError, MonitorResult};
use crate::traits::OrderProvider;

/// Order provider that talks to the real orders, alert, and update endpoints
/// over HTTP.
pub struct HttpOrderProvider {
    client: reqwest::Client,
    endpoints: ApiEndpoints,
}

impl HttpOrderProvider {
    /// Create a provider with a fresh HTTP client.
    pub fn new(endpoints: ApiEndpoints) -> MonitorResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client, endpoints })
    }

    async fn try_fetch_orders(&self) -> MonitorResult<Vec<Order>> {
        let response = self.client.get(&self.endpoints.orders).send().await?;
        if !response.status().is_success() {
            return Err(MonitorError::ApiStatus {
                endpoint: "orders",
                status: response.status(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn try_send_alert(&self, item: &Item, order_id: i64) -> MonitorResult<()> {
        let alert = serde_json::json!({
            "Message": format!(
                "Alert for delivered item: Order {}, Item: {}, Delivery Notifications: {}",
                order_id, item.description, item.delivery_notification
            ),
        });

        let response = self
            .client
            .post(&self.endpoints.alert)
            .json(&alert)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(MonitorError::ApiStatus {
                endpoint: "alert",
                status: response.status(),
            });
        }
        Ok(())
    }

    async fn try_submit_update(&self, order: &Order) -> MonitorResult<()> {
        let response = self
            .client
            .post(&self.endpoints.update)
            .json(order)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(MonitorError::ApiStatus {
                endpoint: "update",
                status: response.status(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl OrderProvider for HttpOrderProvider {
    async fn fetch_orders(&self) -> Vec<Order> {
        match self.try_fetch_orders().await {
            Ok(orders) => orders,
            Err(e) => {
                error!("Failed to fetch orders from API: {e}");
                Vec::new()
            }
        }
    }

    async fn send_delivery_alert(&self, item: &Item, order_id: i64) {
        match self.try_send_alert(item, order_id).await {
            Ok(()) => info!("Alert sent for delivered item: {}", item.description),
            Err(e) => error!(
                "Failed to send alert for delivered item: {}: {e}",
                item.description
            ),
        }
    }

    async fn submit_order_update(&self, order: &Order) {
        match self.try_submit_update(order).await {
            Ok(()) => info!("Updated order sent for processing: OrderId {}", order.order_id),
            Err(e) => error!(
                "Failed to send updated order for processing: OrderId {}: {e}",
                order.order_id
            ),
        }
    }
}
