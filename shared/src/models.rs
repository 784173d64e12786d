//! Order domain model
//!
//! Field names are serialized exactly as the upstream Orders API emits them
//! (note the lower-camel `deliveryNotification` next to the Pascal-cased
//! fields), so fetched orders can be pushed back to the update endpoint
//! byte-compatible with what the API expects.

use serde::{Deserialize, Serialize};

/// A purchase record containing an identifier and a collection of line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "OrderId")]
    pub order_id: i64,

    #[serde(rename = "Items")]
    pub items: Vec<Item>,
}

/// A line item within an order, tracked by delivery status and the number of
/// delivery alerts sent for it so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "Status")]
    pub status: ItemStatus,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "deliveryNotification")]
    pub delivery_notification: u32,
}

/// Delivery status of a line item.
///
/// The upstream API does not document the full value set, so anything beyond
/// the known variants is preserved verbatim in `Other` and round-trips
/// unchanged through the update call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemStatus {
    Delivered,
    Shipped,
    Processing,
    Other(String),
}

impl From<String> for ItemStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Delivered" => ItemStatus::Delivered,
            "Shipped" => ItemStatus::Shipped,
            "Processing" => ItemStatus::Processing,
            _ => ItemStatus::Other(value),
        }
    }
}

impl From<ItemStatus> for String {
    fn from(status: ItemStatus) -> Self {
        match status {
            ItemStatus::Delivered => "Delivered".to_string(),
            ItemStatus::Shipped => "Shipped".to_string(),
            ItemStatus::Processing => "Processing".to_string(),
            ItemStatus::Other(value) => value,
        }
    }
}
