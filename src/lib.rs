// Supply Chain Digital Twin — Monte Carlo scenario-simulation engine.
//
// Overlays named perturbations (supplier delays, demand spikes, inventory
// adjustments) onto baseline tables, runs seeded stochastic trials over a
// time horizon, and reduces the trial-day records into one scenario summary.
// Baseline data flows in through the `source` seam; the caller owns the
// resulting `SimulationResult`.

pub mod aggregate;
pub mod driver;
pub mod error;
pub mod events;
pub mod overlay;
pub mod sampler;
pub mod source;
pub mod types;

pub use aggregate::{AggregationConfig, AvgInventoryMode, FulfilledOrdersMode};
pub use driver::{run_simulation, SimulationConfig};
pub use error::SimError;
pub use sampler::{SamplerConfig, TrialSampler};
pub use source::{BaselineSource, MemorySource};
pub use types::*;
