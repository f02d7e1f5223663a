// Trial Sampler — draws one day's operational outcome from declared
// distributions, conditioned on the overlaid demand table.
//
// Randomness is injected: every call takes an explicit RNG, so a run is
// reproducible from its seed and parallel callers can derive independent
// streams. No hidden global generator anywhere in the hot path.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand_distr::{Binomial, Distribution, Normal, Poisson};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SimError;
use crate::types::{DemandRecord, TrialDayRecord};

/// Tunable distribution parameters for one trial-day draw.
///
/// Defaults mirror the declared random model: inventory cost
/// ~ Normal(1000, 200), stockout events ~ Poisson(0.1), orders fulfilled
/// ~ Binomial(100, 0.95) with a fixed 100 orders per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    pub cost_mean: f64,
    pub cost_std_dev: f64,
    pub stockout_lambda: f64,
    pub fulfillment_p: f64,
    pub total_orders_per_day: u32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            cost_mean: 1000.0,
            cost_std_dev: 200.0,
            stockout_lambda: 0.1,
            fulfillment_p: 0.95,
            total_orders_per_day: 100,
        }
    }
}

/// Per-day outcome sampler. Distribution parameters are validated once at
/// construction so the inner loop cannot fail.
#[derive(Debug)]
pub struct TrialSampler {
    config: SamplerConfig,
    start_date: NaiveDate,
    cost_dist: Normal<f64>,
    stockout_dist: Poisson<f64>,
    fulfillment_dist: Binomial,
}

impl TrialSampler {
    pub fn new(config: SamplerConfig, start_date: NaiveDate) -> Result<Self, SimError> {
        let cost_dist = Normal::new(config.cost_mean, config.cost_std_dev).map_err(|e| {
            SimError::Configuration(format!("invalid inventory cost distribution: {e}"))
        })?;
        let stockout_dist = Poisson::new(config.stockout_lambda).map_err(|e| {
            SimError::Configuration(format!("invalid stockout distribution: {e}"))
        })?;
        let fulfillment_dist =
            Binomial::new(u64::from(config.total_orders_per_day), config.fulfillment_p).map_err(
                |e| SimError::Configuration(format!("invalid fulfillment distribution: {e}")),
            )?;
        Ok(Self {
            config,
            start_date,
            cost_dist,
            stockout_dist,
            fulfillment_dist,
        })
    }

    /// Calendar date for a zero-based day offset.
    pub fn date_for_day(&self, day: u32) -> NaiveDate {
        self.start_date + Duration::days(i64::from(day))
    }

    /// Total overlaid demand across all products on `date`. Days with no
    /// rows are expected (sparse tables) and resolve to 0.
    pub fn demand_on(&self, demand: &[DemandRecord], date: NaiveDate) -> f64 {
        demand
            .iter()
            .filter(|row| row.date == date)
            .map(|row| row.demand)
            .sum()
    }

    /// Draw one trial-day outcome. Never fails: a date with no demand rows
    /// still yields a record.
    pub fn sample_day(
        &self,
        demand: &[DemandRecord],
        rng: &mut impl Rng,
        iteration: u32,
        day: u32,
    ) -> TrialDayRecord {
        let date = self.date_for_day(day);
        let daily_demand = self.demand_on(demand, date);
        debug!(iteration, day, %date, daily_demand, "sampling trial-day");

        let total_inventory_cost = self.cost_dist.sample(rng);
        let stockout_events = self.stockout_dist.sample(rng) as u32;
        let orders_fulfilled = self.fulfillment_dist.sample(rng) as u32;

        TrialDayRecord {
            iteration,
            day,
            date,
            total_inventory_cost,
            stockout_events,
            orders_fulfilled,
            total_orders: self.config.total_orders_per_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sampler() -> TrialSampler {
        TrialSampler::new(SamplerConfig::default(), d(2026, 1, 1)).unwrap()
    }

    #[test]
    fn same_seed_same_draws() {
        let s = sampler();
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        for day in 0..30 {
            assert_eq!(
                s.sample_day(&[], &mut a, 0, day),
                s.sample_day(&[], &mut b, 0, day)
            );
        }
    }

    #[test]
    fn fulfilled_orders_never_exceed_total_orders() {
        let s = sampler();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for day in 0..500 {
            let record = s.sample_day(&[], &mut rng, 0, day);
            assert!(record.orders_fulfilled <= record.total_orders);
            assert_eq!(record.total_orders, 100);
        }
    }

    #[test]
    fn sparse_demand_still_produces_a_record() {
        let s = sampler();
        let demand = vec![DemandRecord {
            product_id: "P1".into(),
            date: d(2026, 1, 10),
            demand: 40.0,
        }];
        assert_eq!(s.demand_on(&demand, d(2026, 1, 2)), 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let record = s.sample_day(&demand, &mut rng, 2, 1);
        assert_eq!(record.iteration, 2);
        assert_eq!(record.day, 1);
        assert_eq!(record.date, d(2026, 1, 2));
    }

    #[test]
    fn demand_on_sums_all_products_for_the_date() {
        let s = sampler();
        let demand = vec![
            DemandRecord {
                product_id: "P1".into(),
                date: d(2026, 1, 5),
                demand: 100.0,
            },
            DemandRecord {
                product_id: "P2".into(),
                date: d(2026, 1, 5),
                demand: 25.0,
            },
        ];
        assert_eq!(s.demand_on(&demand, d(2026, 1, 5)), 125.0);
    }

    #[test]
    fn invalid_distribution_parameters_fail_at_construction() {
        let config = SamplerConfig {
            cost_std_dev: -1.0,
            ..SamplerConfig::default()
        };
        let err = TrialSampler::new(config, d(2026, 1, 1)).unwrap_err();
        assert!(matches!(err, SimError::Configuration(_)));

        let config = SamplerConfig {
            fulfillment_p: 1.5,
            ..SamplerConfig::default()
        };
        assert!(TrialSampler::new(config, d(2026, 1, 1)).is_err());
    }

    #[test]
    fn sampled_cost_tracks_the_configured_mean() {
        let config = SamplerConfig {
            cost_mean: 500.0,
            cost_std_dev: 50.0,
            ..SamplerConfig::default()
        };
        let s = TrialSampler::new(config, d(2026, 1, 1)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let n: u32 = 5000;
        let sum: f64 = (0..n)
            .map(|i| s.sample_day(&[], &mut rng, 0, i).total_inventory_cost)
            .sum();
        let mean = sum / f64::from(n);
        assert!((mean - 500.0).abs() < 5.0, "mean {mean} far from 500");
    }
}
