// Demo baseline and scenario fixtures for the runner.
// Stands in for the warehouse collaborator: three products, two supplier
// lanes each, one quarter of daily demand history.

use chrono::{Duration, NaiveDate};
use twin_engine::{
    AdjustmentType, BaselineData, DemandRecord, DemandSpike, InventoryAdjustment,
    InventoryRecord, MemorySource, Scenario, SupplierDelay, SupplierRecord,
};

pub const DEMO_START: (i32, u32, u32) = (2026, 1, 1);

fn start_date() -> NaiveDate {
    let (y, m, d) = DEMO_START;
    NaiveDate::from_ymd_opt(y, m, d).expect("valid demo start date")
}

fn baseline() -> BaselineData {
    let products: [(&str, i64, f64); 3] =
        [("P1", 200, 100.0), ("P2", 450, 60.0), ("P3", 120, 25.0)];

    let mut inventory = Vec::new();
    let mut demand = Vec::new();
    let mut suppliers = Vec::new();

    for (idx, (product, stock, base_demand)) in products.iter().enumerate() {
        inventory.push(InventoryRecord {
            product_id: (*product).into(),
            current_inventory: *stock,
            reorder_point: stock / 4,
            safety_stock: stock / 8,
        });
        for day in 0..90 {
            // Mild weekly swing so the overlaid table is not flat
            let weekly = 1.0 + 0.1 * ((day % 7) as f64 / 6.0);
            demand.push(DemandRecord {
                product_id: (*product).into(),
                date: start_date() + Duration::days(day),
                demand: base_demand * weekly,
            });
        }
        suppliers.push(SupplierRecord {
            supplier_id: format!("S{}", idx + 1),
            product_id: (*product).into(),
            lead_time_days: 7 + idx as i64 * 3,
            cost_per_unit: 4.0 + idx as f64,
        });
        suppliers.push(SupplierRecord {
            supplier_id: format!("S{}-alt", idx + 1),
            product_id: (*product).into(),
            lead_time_days: 14,
            cost_per_unit: 3.0 + idx as f64,
        });
    }

    BaselineData {
        inventory,
        demand,
        suppliers,
    }
}

pub fn demo_source() -> MemorySource {
    let d = |offset: i64| start_date() + Duration::days(offset);

    let supplier_slowdown = Scenario {
        scenario_id: "supplier-slowdown".into(),
        supplier_delays: vec![SupplierDelay {
            supplier_id: "S1".into(),
            start_date: d(10),
            end_date: d(40),
            delay_days: 5,
        }],
        demand_spikes: vec![],
        inventory_adjustments: vec![],
    };

    let peak_season = Scenario {
        scenario_id: "peak-season".into(),
        supplier_delays: vec![],
        demand_spikes: vec![
            DemandSpike {
                product_id: "P1".into(),
                start_date: d(30),
                end_date: d(60),
                percentage_increase: 50.0,
            },
            DemandSpike {
                product_id: "P2".into(),
                start_date: d(45),
                end_date: d(60),
                percentage_increase: 20.0,
            },
        ],
        inventory_adjustments: vec![],
    };

    let warehouse_drawdown = Scenario {
        scenario_id: "warehouse-drawdown".into(),
        supplier_delays: vec![],
        demand_spikes: vec![],
        inventory_adjustments: vec![InventoryAdjustment {
            product_id: "P2".into(),
            adjustment_type: AdjustmentType::Decrease,
            adjustment_quantity: 150,
        }],
    };

    let combined_shock = Scenario {
        scenario_id: "combined-shock".into(),
        supplier_delays: vec![SupplierDelay {
            supplier_id: "S2".into(),
            start_date: d(0),
            end_date: d(89),
            delay_days: 10,
        }],
        demand_spikes: vec![DemandSpike {
            product_id: "P3".into(),
            start_date: d(20),
            end_date: d(50),
            percentage_increase: 80.0,
        }],
        inventory_adjustments: vec![InventoryAdjustment {
            product_id: "P3".into(),
            adjustment_type: AdjustmentType::Increase,
            adjustment_quantity: 60,
        }],
    };

    MemorySource::new(baseline())
        .with_scenario(Scenario::empty("baseline"))
        .with_scenario(supplier_slowdown)
        .with_scenario(peak_season)
        .with_scenario(warehouse_drawdown)
        .with_scenario(combined_shock)
}

pub fn demo_start_date() -> NaiveDate {
    start_date()
}
