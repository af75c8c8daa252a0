//! Aggregation engine
//!
//! Pure functions over store state: per-entity totals, per-phase totals,
//! grand totals, and the long-shift advisory scan. No side effects; the
//! session controller calls these after every mutation.

use fieldsheet_domain::constants::OVERTIME_ADVISORY_HOURS;
use fieldsheet_domain::OvertimeAdvisory;

use crate::store::{EmployeeStore, EquipmentPhaseTotal, EquipmentStore, PhaseMap, PhaseValue};

/// Total hours/quantities for one entity across all phases.
///
/// Flattens class-code cells for employees and sums REG + standby for
/// equipment; simple categories sum their scalar cells.
#[must_use]
pub fn total_for_entity<V: PhaseValue>(map: &PhaseMap<V>, entity: &str) -> f64 {
    map.total_for_entity(entity)
}

/// Total for one phase across all entities, as a scalar.
///
/// For the equipment category use [`equipment_total_for_phase`], which
/// keeps the REG/standby split.
#[must_use]
pub fn total_for_phase<V: PhaseValue>(map: &PhaseMap<V>, phase: &str) -> f64 {
    map.total_for_phase(phase)
}

/// Equipment per-phase total with the REG/standby split preserved.
#[must_use]
pub fn equipment_total_for_phase(store: &EquipmentStore, phase: &str) -> EquipmentPhaseTotal {
    store.total_for_phase(phase)
}

/// Sum of all entity totals in a store.
#[must_use]
pub fn grand_total<V: PhaseValue>(map: &PhaseMap<V>) -> f64 {
    map.grand_total()
}

/// Scan every employee for a long-shift advisory.
///
/// An employee is flagged when their total is strictly greater than
/// [`OVERTIME_ADVISORY_HOURS`]; exactly on the threshold is not flagged.
/// Advisories are non-blocking, unlike the daily hard cap enforced by
/// the employee store itself.
#[must_use]
pub fn overtime_advisories(store: &EmployeeStore) -> Vec<OvertimeAdvisory> {
    store
        .entities()
        .filter_map(|(key, name)| {
            let total = store.phase_map().total_for_entity(key);
            (total > OVERTIME_ADVISORY_HOURS).then(|| OvertimeAdvisory {
                entity_key: key.clone(),
                name: name.clone(),
                total_hours: total,
            })
        })
        .collect()
}
