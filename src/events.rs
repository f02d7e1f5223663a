// Event stream schema — shipment and production channels shared with the
// streaming collaborators. The simulation core never consumes these; they
// are defined here so every side of the wire agrees on one schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStatus {
    InTransit,
    Delivered,
    Delayed,
}

/// One message on the `shipment-events` channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentEvent {
    pub shipment_id: String,
    pub supplier_id: String,
    pub product_id: String,
    pub quantity: i64,
    pub status: ShipmentStatus,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductionStatus {
    InProgress,
    Completed,
    QualityCheck,
}

/// One message on the `production-events` channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionEvent {
    pub production_id: String,
    pub product_id: String,
    pub quantity: i64,
    pub status: ProductionStatus,
    pub facility_id: String,
    pub timestamp: DateTime<Utc>,
}
