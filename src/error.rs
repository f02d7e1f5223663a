// Error taxonomy for one simulation run.
//
// Configuration and not-found failures are fatal and surface before any
// sampling happens; row-level data problems during overlay application are
// logged and skipped instead (see `overlay`). The engine never retries —
// a run is a batch computation, not a transaction.

/// Errors raised while preparing or running a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// Invalid run parameters: zero iterations or horizon, bad distribution
    /// parameters, unrecognized adjustment types.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The requested scenario does not exist at the baseline source.
    #[error("scenario not found: {scenario_id}")]
    ScenarioNotFound { scenario_id: String },

    /// Systemic baseline data problem (a whole table missing or unreadable).
    #[error("data error: {0}")]
    Data(String),
}
