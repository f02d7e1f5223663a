// Scenario Overlay Applier — merges named perturbations into baseline tables.
//
// Every applier is a pure copy-on-write transform: it takes baseline rows by
// reference and returns a new table, so the caller's baseline is never
// aliased by the overlaid state. Perturbations are applied sequentially and
// accumulate: overlapping demand spikes compound multiplicatively in
// insertion order, overlapping supplier delays add up.

use tracing::warn;

use crate::types::{
    BaselineData, DateWindow, DemandRecord, DemandSpike, InventoryAdjustment, InventoryRecord,
    AdjustmentType, Scenario, SupplierDelay, SupplierRecord,
};

/// Add `delay_days` to the lead time of every lane whose supplier matches a
/// delay whose window touches the simulation window. Supplier lanes carry no
/// date column of their own, so the run window decides whether a delay is in
/// play at all.
pub fn apply_supplier_delays(
    suppliers: &[SupplierRecord],
    delays: &[SupplierDelay],
    run_window: DateWindow,
) -> Vec<SupplierRecord> {
    let mut out = suppliers.to_vec();
    for delay in delays {
        let window = delay.window();
        if !window.is_valid() {
            warn!(
                supplier_id = %delay.supplier_id,
                start = %delay.start_date,
                end = %delay.end_date,
                "skipping supplier delay with inverted date window"
            );
            continue;
        }
        if !window.overlaps(&run_window) {
            continue;
        }
        for row in out.iter_mut() {
            if row.supplier_id == delay.supplier_id {
                row.lead_time_days += delay.delay_days;
            }
        }
    }
    out
}

/// Scale in-window demand rows by `1 + percentage_increase / 100`.
/// Overlapping spikes on the same product compound multiplicatively.
pub fn apply_demand_spikes(demand: &[DemandRecord], spikes: &[DemandSpike]) -> Vec<DemandRecord> {
    let mut out = demand.to_vec();
    for spike in spikes {
        let window = spike.window();
        if !window.is_valid() {
            warn!(
                product_id = %spike.product_id,
                start = %spike.start_date,
                end = %spike.end_date,
                "skipping demand spike with inverted date window"
            );
            continue;
        }
        let factor = 1.0 + spike.percentage_increase / 100.0;
        for row in out.iter_mut() {
            if row.product_id == spike.product_id && window.contains(row.date) {
                row.demand *= factor;
            }
        }
    }
    out
}

/// Apply signed stock changes per product. No date window: adjustments take
/// effect globally before the first trial-day is sampled.
pub fn apply_inventory_adjustments(
    inventory: &[InventoryRecord],
    adjustments: &[InventoryAdjustment],
) -> Vec<InventoryRecord> {
    let mut out = inventory.to_vec();
    for adjustment in adjustments {
        for row in out.iter_mut() {
            if row.product_id == adjustment.product_id {
                match adjustment.adjustment_type {
                    AdjustmentType::Increase => {
                        row.current_inventory += adjustment.adjustment_quantity
                    }
                    AdjustmentType::Decrease => {
                        row.current_inventory -= adjustment.adjustment_quantity
                    }
                }
            }
        }
    }
    out
}

/// Overlay a full scenario onto the baseline, in the fixed order
/// supplier delays → demand spikes → inventory adjustments.
pub fn apply_scenario(
    baseline: &BaselineData,
    scenario: &Scenario,
    run_window: DateWindow,
) -> BaselineData {
    BaselineData {
        suppliers: apply_supplier_delays(&baseline.suppliers, &scenario.supplier_delays, run_window),
        demand: apply_demand_spikes(&baseline.demand, &scenario.demand_spikes),
        inventory: apply_inventory_adjustments(&baseline.inventory, &scenario.inventory_adjustments),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn demand_row(product: &str, date: NaiveDate, demand: f64) -> DemandRecord {
        DemandRecord {
            product_id: product.into(),
            date,
            demand,
        }
    }

    fn supplier_row(supplier: &str, product: &str, lead: i64) -> SupplierRecord {
        SupplierRecord {
            supplier_id: supplier.into(),
            product_id: product.into(),
            lead_time_days: lead,
            cost_per_unit: 4.5,
        }
    }

    fn inventory_row(product: &str, stock: i64) -> InventoryRecord {
        InventoryRecord {
            product_id: product.into(),
            current_inventory: stock,
            reorder_point: 50,
            safety_stock: 20,
        }
    }

    #[test]
    fn empty_perturbation_lists_return_baseline_unchanged() {
        let baseline = BaselineData {
            inventory: vec![inventory_row("P1", 200)],
            demand: vec![demand_row("P1", d(2026, 1, 5), 100.0)],
            suppliers: vec![supplier_row("S1", "P1", 7)],
        };
        let window = DateWindow::new(d(2026, 1, 1), d(2026, 3, 31));
        let overlaid = apply_scenario(&baseline, &Scenario::empty("noop"), window);
        assert_eq!(overlaid, baseline);
    }

    #[test]
    fn spike_applies_only_inside_window_and_to_matching_product() {
        let demand = vec![
            demand_row("P1", d(2026, 1, 5), 100.0),
            demand_row("P1", d(2026, 1, 15), 100.0),
            demand_row("P2", d(2026, 1, 15), 100.0),
        ];
        let spikes = vec![DemandSpike {
            product_id: "P1".into(),
            start_date: d(2026, 1, 10),
            end_date: d(2026, 1, 20),
            percentage_increase: 50.0,
        }];
        let out = apply_demand_spikes(&demand, &spikes);
        assert_eq!(out[0].demand, 100.0);
        assert_eq!(out[1].demand, 150.0);
        assert_eq!(out[2].demand, 100.0);
    }

    #[test]
    fn overlapping_spikes_compound_multiplicatively_in_insertion_order() {
        let demand = vec![demand_row("P1", d(2026, 2, 1), 100.0)];
        let spikes = vec![
            DemandSpike {
                product_id: "P1".into(),
                start_date: d(2026, 2, 1),
                end_date: d(2026, 2, 1),
                percentage_increase: 20.0,
            },
            DemandSpike {
                product_id: "P1".into(),
                start_date: d(2026, 2, 1),
                end_date: d(2026, 2, 1),
                percentage_increase: 10.0,
            },
        ];
        let out = apply_demand_spikes(&demand, &spikes);
        // x1.2 then x1.1, not x1.3
        assert!((out[0].demand - 132.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_spikes_apply_independently() {
        let demand = vec![
            demand_row("P1", d(2026, 2, 1), 100.0),
            demand_row("P1", d(2026, 3, 1), 100.0),
        ];
        let spikes = vec![
            DemandSpike {
                product_id: "P1".into(),
                start_date: d(2026, 2, 1),
                end_date: d(2026, 2, 10),
                percentage_increase: 20.0,
            },
            DemandSpike {
                product_id: "P1".into(),
                start_date: d(2026, 3, 1),
                end_date: d(2026, 3, 10),
                percentage_increase: 10.0,
            },
        ];
        let out = apply_demand_spikes(&demand, &spikes);
        assert!((out[0].demand - 120.0).abs() < 1e-9);
        assert!((out[1].demand - 110.0).abs() < 1e-9);
    }

    #[test]
    fn inverted_spike_window_is_skipped_not_fatal() {
        let demand = vec![demand_row("P1", d(2026, 2, 1), 100.0)];
        let spikes = vec![DemandSpike {
            product_id: "P1".into(),
            start_date: d(2026, 2, 10),
            end_date: d(2026, 2, 1),
            percentage_increase: 500.0,
        }];
        let out = apply_demand_spikes(&demand, &spikes);
        assert_eq!(out[0].demand, 100.0);
    }

    #[test]
    fn overlapping_delays_compose_additively() {
        let suppliers = vec![supplier_row("S1", "P1", 7), supplier_row("S2", "P1", 3)];
        let window = DateWindow::new(d(2026, 1, 1), d(2026, 3, 31));
        let delays = vec![
            SupplierDelay {
                supplier_id: "S1".into(),
                start_date: d(2026, 1, 10),
                end_date: d(2026, 1, 20),
                delay_days: 5,
            },
            SupplierDelay {
                supplier_id: "S1".into(),
                start_date: d(2026, 1, 15),
                end_date: d(2026, 1, 25),
                delay_days: 2,
            },
        ];
        let out = apply_supplier_delays(&suppliers, &delays, window);
        assert_eq!(out[0].lead_time_days, 14);
        assert_eq!(out[1].lead_time_days, 3);
    }

    #[test]
    fn delay_outside_run_window_is_inert() {
        let suppliers = vec![supplier_row("S1", "P1", 7)];
        let window = DateWindow::new(d(2026, 1, 1), d(2026, 1, 31));
        let delays = vec![SupplierDelay {
            supplier_id: "S1".into(),
            start_date: d(2026, 6, 1),
            end_date: d(2026, 6, 30),
            delay_days: 10,
        }];
        let out = apply_supplier_delays(&suppliers, &delays, window);
        assert_eq!(out[0].lead_time_days, 7);
    }

    #[test]
    fn adjustments_are_signed_by_type() {
        let inventory = vec![inventory_row("P1", 200), inventory_row("P2", 80)];
        let adjustments = vec![
            InventoryAdjustment {
                product_id: "P1".into(),
                adjustment_type: AdjustmentType::Increase,
                adjustment_quantity: 50,
            },
            InventoryAdjustment {
                product_id: "P2".into(),
                adjustment_type: AdjustmentType::Decrease,
                adjustment_quantity: 30,
            },
        ];
        let out = apply_inventory_adjustments(&inventory, &adjustments);
        assert_eq!(out[0].current_inventory, 250);
        assert_eq!(out[1].current_inventory, 50);
    }

    #[test]
    fn appliers_do_not_mutate_the_baseline() {
        let demand = vec![demand_row("P1", d(2026, 2, 1), 100.0)];
        let spikes = vec![DemandSpike {
            product_id: "P1".into(),
            start_date: d(2026, 2, 1),
            end_date: d(2026, 2, 28),
            percentage_increase: 25.0,
        }];
        let _ = apply_demand_spikes(&demand, &spikes);
        assert_eq!(demand[0].demand, 100.0);
    }
}
