// Simulation Driver — orchestrates N trials x H days over an overlaid
// baseline and hands the full record set to the aggregator.
//
// Overlays are applied exactly once, up front; no I/O happens inside the
// sampling loop. Each iteration gets its own RNG stream seeded as
// `seed + iteration`, so a parallel split across iterations would draw the
// same statistics as the sequential loop.

use chrono::{Duration, NaiveDate, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::aggregate::{self, AggregationConfig};
use crate::error::SimError;
use crate::overlay;
use crate::sampler::{SamplerConfig, TrialSampler};
use crate::source::BaselineSource;
use crate::types::{BaselineData, DateWindow, SimulationResult};

/// Stream separator for the aggregator's RNG so its draws never reuse an
/// iteration stream (iteration streams occupy `seed..seed+iterations`).
const AGGREGATION_STREAM: u64 = 0x9e37_79b9_7f4a_7c15;

/// Externally supplied run parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub iterations: u32,
    pub horizon_days: u32,
    pub seed: u64,
    /// Day 0 of the horizon. Defaults to today; fix it for reproducible runs.
    pub start_date: NaiveDate,
    pub sampler: SamplerConfig,
    pub aggregation: AggregationConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            horizon_days: 90,
            seed: 0,
            start_date: Utc::now().date_naive(),
            sampler: SamplerConfig::default(),
            aggregation: AggregationConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Reject degenerate runs before any data is loaded or sampled.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.iterations == 0 {
            return Err(SimError::Configuration(
                "iterations must be positive".into(),
            ));
        }
        if self.horizon_days == 0 {
            return Err(SimError::Configuration(
                "time horizon must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Inclusive calendar window covered by the horizon.
    pub fn run_window(&self) -> DateWindow {
        let end = self.start_date + Duration::days(i64::from(self.horizon_days) - 1);
        DateWindow::new(self.start_date, end)
    }
}

/// Run one full Monte Carlo simulation for `scenario_id`.
///
/// Fails fast with a configuration error on degenerate parameters, a
/// not-found error when the scenario does not resolve, and a data error when
/// a baseline table is systemically unavailable. Otherwise produces exactly
/// `iterations x horizon_days` trial-day draws and returns their aggregate.
pub fn run_simulation(
    source: &dyn BaselineSource,
    scenario_id: &str,
    config: &SimulationConfig,
) -> Result<SimulationResult, SimError> {
    config.validate()?;

    let scenario = source.scenario(scenario_id)?;
    let baseline = BaselineData {
        inventory: source.inventory()?,
        demand: source.demand()?,
        suppliers: source.suppliers()?,
    };
    debug!(
        scenario_id,
        inventory_rows = baseline.inventory.len(),
        demand_rows = baseline.demand.len(),
        supplier_rows = baseline.suppliers.len(),
        "baseline loaded"
    );

    let effective = overlay::apply_scenario(&baseline, &scenario, config.run_window());
    let sampler = TrialSampler::new(config.sampler.clone(), config.start_date)?;

    info!(
        scenario_id,
        iterations = config.iterations,
        horizon_days = config.horizon_days,
        seed = config.seed,
        "starting Monte Carlo run"
    );

    let capacity = config.iterations as usize * config.horizon_days as usize;
    let mut records = Vec::with_capacity(capacity);
    for iteration in 0..config.iterations {
        if iteration % 100 == 0 {
            info!(iteration, total = config.iterations, "running iteration");
        }
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed.wrapping_add(u64::from(iteration)));
        for day in 0..config.horizon_days {
            records.push(sampler.sample_day(&effective.demand, &mut rng, iteration, day));
        }
    }
    debug_assert_eq!(records.len(), capacity);

    let mut agg_rng = ChaCha8Rng::seed_from_u64(config.seed ^ AGGREGATION_STREAM);
    aggregate::aggregate(
        &records,
        scenario_id,
        config.iterations,
        &config.aggregation,
        &effective.inventory,
        &mut agg_rng,
    )
}
