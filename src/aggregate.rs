// Aggregator — reduces the full trial-day record set into one
// scenario-level SimulationResult.
//
// The fulfilled-orders reduction has two modes. The historical estimator
// scales the per-record mean by the iteration count; it is statistically
// unusual (a plain sum is the natural estimator) but kept as the default
// for output compatibility with prior runs. `Summed` is the corrected
// alternative.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::types::{InventoryRecord, SimulationResult, TrialDayRecord};

/// Legacy placeholder draw for `AvgInventoryMode::Sampled`.
const SAMPLED_INVENTORY_MEAN: f64 = 1000.0;
const SAMPLED_INVENTORY_STD_DEV: f64 = 100.0;

/// How `fulfilled_orders` is reduced from the record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfilledOrdersMode {
    /// mean(orders_fulfilled) × iterations — historical formula, default.
    MeanTimesIterations,
    /// sum(orders_fulfilled) — the natural estimator.
    Summed,
}

/// Where `average_inventory_level` comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvgInventoryMode {
    /// Mean `current_inventory` of the overlaid inventory table — default.
    OverlaidTable,
    /// Independent Normal(1000, 100) draw, reproducing the legacy
    /// placeholder behavior.
    Sampled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Currency penalty per stockout event.
    pub stockout_unit_cost: f64,
    pub fulfilled_orders_mode: FulfilledOrdersMode,
    pub avg_inventory_mode: AvgInventoryMode,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            stockout_unit_cost: 1000.0,
            fulfilled_orders_mode: FulfilledOrdersMode::MeanTimesIterations,
            avg_inventory_mode: AvgInventoryMode::OverlaidTable,
        }
    }
}

/// Reduce all trial-day records into the scenario summary.
///
/// `inventory` is the overlaid inventory table (for
/// [`AvgInventoryMode::OverlaidTable`]); `rng` feeds the legacy sampled mode
/// and is untouched otherwise.
pub fn aggregate(
    records: &[TrialDayRecord],
    scenario_id: &str,
    iterations: u32,
    config: &AggregationConfig,
    inventory: &[InventoryRecord],
    rng: &mut impl Rng,
) -> Result<SimulationResult, SimError> {
    let n = records.len();

    let total_cost: f64 = records.iter().map(|r| r.total_inventory_cost).sum();
    let inventory_cost = if n > 0 { total_cost / n as f64 } else { 0.0 };

    let stockout_events: u64 = records.iter().map(|r| u64::from(r.stockout_events)).sum();
    let stockout_cost = stockout_events as f64 * config.stockout_unit_cost;

    let total_orders: u64 = records.iter().map(|r| u64::from(r.total_orders)).sum();

    let fulfilled = match config.fulfilled_orders_mode {
        FulfilledOrdersMode::MeanTimesIterations => {
            let mean_fulfilled = if n > 0 {
                records.iter().map(|r| f64::from(r.orders_fulfilled)).sum::<f64>() / n as f64
            } else {
                0.0
            };
            mean_fulfilled * f64::from(iterations)
        }
        FulfilledOrdersMode::Summed => records
            .iter()
            .map(|r| f64::from(r.orders_fulfilled))
            .sum(),
    };

    // Guarded default: an all-zero order book is a 0% service level, not a
    // division error.
    let service_level = if total_orders > 0 {
        fulfilled / total_orders as f64 * 100.0
    } else {
        0.0
    };

    let average_inventory_level = match config.avg_inventory_mode {
        AvgInventoryMode::OverlaidTable => {
            if inventory.is_empty() {
                0.0
            } else {
                inventory
                    .iter()
                    .map(|r| r.current_inventory as f64)
                    .sum::<f64>()
                    / inventory.len() as f64
            }
        }
        AvgInventoryMode::Sampled => {
            let dist = Normal::new(SAMPLED_INVENTORY_MEAN, SAMPLED_INVENTORY_STD_DEV)
                .map_err(|e| {
                    SimError::Configuration(format!("invalid sampled inventory distribution: {e}"))
                })?;
            dist.sample(rng)
        }
    };

    Ok(SimulationResult {
        scenario_id: scenario_id.to_string(),
        total_cost,
        inventory_cost,
        stockout_cost,
        service_level,
        stockout_events,
        total_orders,
        fulfilled_orders: fulfilled as u64,
        on_time_delivery: service_level,
        average_inventory_level,
    })
}
