// Supply chain baseline tables, scenario perturbations, and result records.
// Wire schema matches the warehouse collaborator: snake_case fields, ISO dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Baseline Tables ────────────────────────────────────────────────────────

/// Current stock posture for one product. Mutated only by inventory
/// adjustment overlays before a run starts; frozen during trials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub product_id: String,
    pub current_inventory: i64,
    pub reorder_point: i64,
    pub safety_stock: i64,
}

/// One (product, date) demand observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandRecord {
    pub product_id: String,
    pub date: NaiveDate,
    pub demand: f64,
}

/// One supplier lane for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRecord {
    pub supplier_id: String,
    pub product_id: String,
    pub lead_time_days: i64,
    pub cost_per_unit: f64,
}

/// The three baseline tables a simulation runs against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineData {
    pub inventory: Vec<InventoryRecord>,
    pub demand: Vec<DemandRecord>,
    pub suppliers: Vec<SupplierRecord>,
}

// ─── Date Windows ───────────────────────────────────────────────────────────

/// Inclusive [start, end] date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// An inverted window (end before start) matches nothing.
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn overlaps(&self, other: &DateWindow) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

// ─── Scenario Perturbations ─────────────────────────────────────────────────

/// Additive lead-time increase for one supplier over a date window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierDelay {
    pub supplier_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub delay_days: i64,
}

impl SupplierDelay {
    pub fn window(&self) -> DateWindow {
        DateWindow::new(self.start_date, self.end_date)
    }
}

/// Multiplicative demand increase for one product over a date window.
/// A `percentage_increase` of 50.0 scales in-window demand by 1.5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandSpike {
    pub product_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub percentage_increase: f64,
}

impl DemandSpike {
    pub fn window(&self) -> DateWindow {
        DateWindow::new(self.start_date, self.end_date)
    }
}

/// Closed set of adjustment directions. Anything else on the wire is a
/// deserialization failure, never a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentType {
    Increase,
    Decrease,
}

/// One-shot signed stock change for a product, applied globally at run start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryAdjustment {
    pub product_id: String,
    pub adjustment_type: AdjustmentType,
    pub adjustment_quantity: i64,
}

/// A named bundle of perturbations to overlay onto the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub scenario_id: String,
    #[serde(default)]
    pub supplier_delays: Vec<SupplierDelay>,
    #[serde(default)]
    pub demand_spikes: Vec<DemandSpike>,
    #[serde(default)]
    pub inventory_adjustments: Vec<InventoryAdjustment>,
}

impl Scenario {
    /// A scenario with no perturbations: overlay it onto any baseline and
    /// you get the baseline back.
    pub fn empty(scenario_id: impl Into<String>) -> Self {
        Self {
            scenario_id: scenario_id.into(),
            supplier_delays: Vec::new(),
            demand_spikes: Vec::new(),
            inventory_adjustments: Vec::new(),
        }
    }
}

// ─── Trial Output ───────────────────────────────────────────────────────────

/// One sampled trial-day. Produced by the sampler, consumed immediately by
/// the aggregator; never persisted individually.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialDayRecord {
    pub iteration: u32,
    pub day: u32,
    pub date: NaiveDate,
    pub total_inventory_cost: f64,
    pub stockout_events: u32,
    pub orders_fulfilled: u32,
    pub total_orders: u32,
}

/// Scenario-level summary emitted once per run. Immutable after
/// construction; the caller owns it from there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub scenario_id: String,
    pub total_cost: f64,
    pub inventory_cost: f64,
    pub stockout_cost: f64,
    pub service_level: f64,
    pub stockout_events: u64,
    pub total_orders: u64,
    pub fulfilled_orders: u64,
    pub on_time_delivery: f64,
    pub average_inventory_level: f64,
}
