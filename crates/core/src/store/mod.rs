//! Category state stores
//!
//! The five entity categories (employees, equipment, materials, vendors,
//! dumping sites) are one polymorphic concept with three cell shapes:
//! a scalar quantity, a REG/standby pair, and a class-code-keyed hour map.
//! [`PhaseMap`] holds entity -> phase -> cell for any [`PhaseValue`]; the
//! category store wrappers layer the category-specific guard semantics on
//! top.

pub mod employee;
pub mod equipment;
pub mod simple;

use std::collections::{BTreeMap, BTreeSet};

pub use employee::{ClassCell, EmployeeStore};
pub use equipment::{EquipmentCell, EquipmentField, EquipmentPhaseTotal, EquipmentStore};
use fieldsheet_domain::utils::numeric::parse_hours;
pub use simple::{SimpleCategory, SimpleStore};

/// One editable cell in a working copy.
///
/// Cell contents are normalized numeric strings (see
/// `fieldsheet_domain::utils::numeric`), not parsed numbers, so partially
/// typed values survive between keystrokes.
pub trait PhaseValue: Clone + Default {
    /// Sum of all hours/quantities carried by the cell.
    fn total(&self) -> f64;

    /// True when the cell carries no usable value.
    fn is_blank(&self) -> bool;
}

impl PhaseValue for String {
    fn total(&self) -> f64 {
        parse_hours(self)
    }

    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

/// Entity key -> phase code -> cell value.
///
/// `BTreeMap` keeps iteration deterministic, which the aggregation engine
/// and the resolver both rely on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseMap<V: PhaseValue> {
    entries: BTreeMap<String, BTreeMap<String, V>>,
}

impl<V: PhaseValue> PhaseMap<V> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Insert a cell value, creating the entity row if needed.
    pub fn insert(&mut self, entity: &str, phase: &str, value: V) {
        self.entries
            .entry(entity.to_string())
            .or_default()
            .insert(phase.to_string(), value);
    }

    /// Look up a cell.
    #[must_use]
    pub fn get(&self, entity: &str, phase: &str) -> Option<&V> {
        self.entries.get(entity).and_then(|row| row.get(phase))
    }

    /// Mutable access to a cell, creating it if needed.
    pub fn cell_mut(&mut self, entity: &str, phase: &str) -> &mut V {
        self.entries
            .entry(entity.to_string())
            .or_default()
            .entry(phase.to_string())
            .or_default()
    }

    /// Iterate entity rows in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, V>)> {
        self.entries.iter()
    }

    /// The phase row for one entity, if any.
    #[must_use]
    pub fn row(&self, entity: &str) -> Option<&BTreeMap<String, V>> {
        self.entries.get(entity)
    }

    /// Collect every phase-code key present in any row into `out`.
    pub fn collect_phases(&self, out: &mut BTreeSet<String>) {
        for row in self.entries.values() {
            for phase in row.keys() {
                out.insert(phase.clone());
            }
        }
    }

    /// Sum of one entity's cells across all phases.
    #[must_use]
    pub fn total_for_entity(&self, entity: &str) -> f64 {
        self.entries
            .get(entity)
            .map(|row| row.values().map(PhaseValue::total).sum())
            .unwrap_or(0.0)
    }

    /// Sum of one phase's cells across all entities.
    #[must_use]
    pub fn total_for_phase(&self, phase: &str) -> f64 {
        self.entries
            .values()
            .filter_map(|row| row.get(phase))
            .map(PhaseValue::total)
            .sum()
    }

    /// Sum of every cell in the map.
    #[must_use]
    pub fn grand_total(&self) -> f64 {
        self.entries.keys().map(|key| self.total_for_entity(key)).sum()
    }

    /// Rewrite `old` phase keys to `new` in every entity row.
    ///
    /// Callers are responsible for checking that `new` is not already an
    /// active phase code; the rewrite itself cannot fail.
    pub fn rename_phase(&mut self, old: &str, new: &str) {
        for row in self.entries.values_mut() {
            if let Some(value) = row.remove(old) {
                row.insert(new.to_string(), value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PhaseMap<String> {
        let mut map = PhaseMap::new();
        map.insert("e1", "A", "2.5".to_string());
        map.insert("e1", "B", "1.0".to_string());
        map.insert("e2", "A", "4.0".to_string());
        map
    }

    #[test]
    fn test_get_and_totals() {
        let map = sample();
        assert_eq!(map.get("e1", "A"), Some(&"2.5".to_string()));
        assert_eq!(map.get("e1", "C"), None);
        assert!((map.total_for_entity("e1") - 3.5).abs() < f64::EPSILON);
        assert!((map.total_for_phase("A") - 6.5).abs() < f64::EPSILON);
        assert!((map.grand_total() - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rename_phase_moves_all_rows() {
        let mut map = sample();
        map.rename_phase("A", "Z");
        assert_eq!(map.get("e1", "A"), None);
        assert_eq!(map.get("e2", "A"), None);
        assert_eq!(map.get("e1", "Z"), Some(&"2.5".to_string()));
        assert_eq!(map.get("e2", "Z"), Some(&"4.0".to_string()));
    }

    #[test]
    fn test_collect_phases() {
        let map = sample();
        let mut phases = BTreeSet::new();
        map.collect_phases(&mut phases);
        assert_eq!(phases.into_iter().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_blank_string_cell() {
        assert!("  ".to_string().is_blank());
        assert!(!"0".to_string().is_blank());
        assert_eq!("7.25".to_string().total(), 7.25);
    }
}
