// Baseline/scenario source seam — the boundary to the data warehouse
// collaborator. The engine only ever sees these four queries; persistence,
// connection pooling, and query details live on the other side.

use std::collections::HashMap;

use crate::error::SimError;
use crate::types::{BaselineData, DemandRecord, InventoryRecord, Scenario, SupplierRecord};

/// Read-side collaborator providing baseline tables and scenario
/// definitions. A whole table failing to load is systemic and fatal
/// ([`SimError::Data`]); an unresolved scenario id is
/// [`SimError::ScenarioNotFound`].
pub trait BaselineSource {
    fn inventory(&self) -> Result<Vec<InventoryRecord>, SimError>;
    fn demand(&self) -> Result<Vec<DemandRecord>, SimError>;
    fn suppliers(&self) -> Result<Vec<SupplierRecord>, SimError>;
    fn scenario(&self, scenario_id: &str) -> Result<Scenario, SimError>;
}

/// In-memory source backing tests and the demo runner. Tables are optional
/// so a missing table surfaces as the same systemic data error a broken
/// warehouse query would.
#[derive(Debug, Default)]
pub struct MemorySource {
    inventory: Option<Vec<InventoryRecord>>,
    demand: Option<Vec<DemandRecord>>,
    suppliers: Option<Vec<SupplierRecord>>,
    scenarios: HashMap<String, Scenario>,
}

impl MemorySource {
    pub fn new(baseline: BaselineData) -> Self {
        Self {
            inventory: Some(baseline.inventory),
            demand: Some(baseline.demand),
            suppliers: Some(baseline.suppliers),
            scenarios: HashMap::new(),
        }
    }

    /// A source with no tables at all; every baseline query fails.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.scenarios.insert(scenario.scenario_id.clone(), scenario);
        self
    }

    pub fn scenario_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.scenarios.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl BaselineSource for MemorySource {
    fn inventory(&self) -> Result<Vec<InventoryRecord>, SimError> {
        self.inventory
            .clone()
            .ok_or_else(|| SimError::Data("inventory table unavailable".into()))
    }

    fn demand(&self) -> Result<Vec<DemandRecord>, SimError> {
        self.demand
            .clone()
            .ok_or_else(|| SimError::Data("demand table unavailable".into()))
    }

    fn suppliers(&self) -> Result<Vec<SupplierRecord>, SimError> {
        self.suppliers
            .clone()
            .ok_or_else(|| SimError::Data("supplier table unavailable".into()))
    }

    fn scenario(&self, scenario_id: &str) -> Result<Scenario, SimError> {
        self.scenarios
            .get(scenario_id)
            .cloned()
            .ok_or_else(|| SimError::ScenarioNotFound {
                scenario_id: scenario_id.to_string(),
            })
    }
}
