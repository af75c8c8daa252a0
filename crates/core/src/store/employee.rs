//! Employee category store
//!
//! Employee hours are keyed by phase, then by labor class code, and are
//! subject to the daily hour cap: a `set` whose recomputed entity total
//! would exceed [`MAX_DAILY_EMPLOYEE_HOURS`] is rejected before anything
//! is committed, so no rollback is ever needed.

use std::collections::{BTreeMap, HashMap};

use fieldsheet_domain::constants::MAX_DAILY_EMPLOYEE_HOURS;
use fieldsheet_domain::utils::numeric::{normalize, parse_hours};
use fieldsheet_domain::{EmployeeEntry, FieldSheetError, Result};

use super::{PhaseMap, PhaseValue};

/// Class code -> hours string for one employee on one phase.
pub type ClassCell = BTreeMap<String, String>;

impl PhaseValue for ClassCell {
    fn total(&self) -> f64 {
        self.values().map(|v| parse_hours(v)).sum()
    }

    fn is_blank(&self) -> bool {
        self.values().all(|v| v.trim().is_empty())
    }
}

/// Working copy of every employee's per-phase, per-class hours.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeStore {
    map: PhaseMap<ClassCell>,
    /// Entity key -> display name, used for cap-rejection alerts and
    /// overtime advisories.
    names: BTreeMap<String, String>,
}

impl EmployeeStore {
    /// Snapshot the employee entries of a timesheet into a working copy.
    #[must_use]
    pub fn from_entries(entries: &[EmployeeEntry]) -> Self {
        let mut store = Self::default();
        for (index, entry) in entries.iter().enumerate() {
            let key = entry.key(index);
            store.names.insert(key.clone(), entry.name.clone());
            for (phase, classes) in &entry.hours_per_phase {
                for (class, hours) in classes {
                    store.map.cell_mut(&key, phase).insert(class.clone(), normalize(hours));
                }
            }
        }
        store
    }

    /// Current value of one hour cell; absent cells read as `"0"`.
    #[must_use]
    pub fn get(&self, entity: &str, phase: &str, class: &str) -> String {
        self.map
            .get(entity, phase)
            .and_then(|cell| cell.get(class))
            .cloned()
            .unwrap_or_else(|| "0".to_string())
    }

    /// Normalize and commit one hour cell.
    ///
    /// Recomputes the employee's grand total across all phases and class
    /// codes including the pending value; totals above the daily cap leave
    /// the store unchanged and return
    /// [`FieldSheetError::HoursCapExceeded`] naming the employee.
    pub fn set(&mut self, entity: &str, phase: &str, class: &str, raw: &str) -> Result<String> {
        let value = normalize(raw);
        let current = self
            .map
            .get(entity, phase)
            .and_then(|cell| cell.get(class))
            .map_or(0.0, |v| parse_hours(v));
        let pending_total = self.map.total_for_entity(entity) - current + parse_hours(&value);

        if pending_total > MAX_DAILY_EMPLOYEE_HOURS {
            return Err(FieldSheetError::HoursCapExceeded {
                employee: self.display_name(entity),
                total: pending_total,
            });
        }

        self.map.cell_mut(entity, phase).insert(class.to_string(), value.clone());
        Ok(value)
    }

    /// Display name for an entity key, falling back to the key itself for
    /// rows that arrived without a name.
    #[must_use]
    pub fn display_name(&self, entity: &str) -> String {
        self.names.get(entity).cloned().unwrap_or_else(|| entity.to_string())
    }

    /// Every known employee as `(key, display name)`, in key order.
    pub fn entities(&self) -> impl Iterator<Item = (&String, &String)> {
        self.names.iter()
    }

    /// The underlying phase map, for the aggregation engine.
    #[must_use]
    pub fn phase_map(&self) -> &PhaseMap<ClassCell> {
        &self.map
    }

    /// Rewrite a phase key across every employee row.
    pub fn rename_phase(&mut self, old: &str, new: &str) {
        self.map.rename_phase(old, new);
    }

    /// Rebuild one employee's wire-shaped hour map from the working copy,
    /// keeping only positive values.
    #[must_use]
    pub fn export(&self, entity: &str) -> HashMap<String, HashMap<String, String>> {
        let mut out = HashMap::new();
        if let Some(row) = self.map.row(entity) {
            for (phase, cell) in row {
                let kept: HashMap<String, String> = cell
                    .iter()
                    .filter(|(_, hours)| parse_hours(hours) > 0.0)
                    .map(|(class, hours)| (class.clone(), hours.clone()))
                    .collect();
                if !kept.is_empty() {
                    out.insert(phase.clone(), kept);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str) -> EmployeeEntry {
        EmployeeEntry {
            id: Some(id.to_string()),
            name: name.to_string(),
            class_codes: vec!["OP".to_string(), "LAB".to_string()],
            hours_per_phase: HashMap::new(),
        }
    }

    #[test]
    fn test_get_defaults_to_zero() {
        let store = EmployeeStore::from_entries(&[entry("e1", "J. Smith")]);
        assert_eq!(store.get("e1", "PH100", "OP"), "0");
    }

    #[test]
    fn test_set_normalizes() {
        let mut store = EmployeeStore::from_entries(&[entry("e1", "J. Smith")]);
        let committed = store.set("e1", "PH100", "OP", "007.5").unwrap();
        assert_eq!(committed, "7.5");
        assert_eq!(store.get("e1", "PH100", "OP"), "7.5");
    }

    #[test]
    fn test_cap_rejection_names_employee_and_keeps_state() {
        let mut store = EmployeeStore::from_entries(&[entry("e1", "J. Smith")]);
        store.set("e1", "PH100", "OP", "12").unwrap();
        store.set("e1", "PH200", "LAB", "10").unwrap();

        let err = store.set("e1", "PH300", "OP", "3").unwrap_err();
        match err {
            FieldSheetError::HoursCapExceeded { employee, total } => {
                assert_eq!(employee, "J. Smith");
                assert!((total - 25.0).abs() < 1e-9);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // rejected mutation left the cell untouched
        assert_eq!(store.get("e1", "PH300", "OP"), "0");
        assert!((store.phase_map().total_for_entity("e1") - 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_exactly_24_hours_is_allowed() {
        let mut store = EmployeeStore::from_entries(&[entry("e1", "J. Smith")]);
        store.set("e1", "PH100", "OP", "16").unwrap();
        assert!(store.set("e1", "PH200", "OP", "8").is_ok());
        assert!((store.phase_map().total_for_entity("e1") - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_replacing_a_cell_counts_the_replacement_not_the_sum() {
        let mut store = EmployeeStore::from_entries(&[entry("e1", "J. Smith")]);
        store.set("e1", "PH100", "OP", "20").unwrap();
        // 20 -> 23 is legal even though 20 + 23 > 24
        assert!(store.set("e1", "PH100", "OP", "23").is_ok());
        assert_eq!(store.get("e1", "PH100", "OP"), "23");
    }

    #[test]
    fn test_export_drops_non_positive_values() {
        let mut store = EmployeeStore::from_entries(&[entry("e1", "J. Smith")]);
        store.set("e1", "PH100", "OP", "8").unwrap();
        store.set("e1", "PH100", "LAB", "0").unwrap();
        store.set("e1", "PH200", "OP", "").unwrap();

        let exported = store.export("e1");
        assert_eq!(exported.len(), 1);
        assert_eq!(exported["PH100"].len(), 1);
        assert_eq!(exported["PH100"]["OP"], "8");
    }

    #[test]
    fn test_display_name_falls_back_to_key() {
        let store = EmployeeStore::default();
        assert_eq!(store.display_name("emp-9"), "emp-9");
    }
}
