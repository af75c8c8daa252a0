//! Edit-session working copy
//!
//! One mutable snapshot of a timesheet's editable data: the five category
//! stores plus the total-quantities map and the notes text. Built from a
//! [`TimesheetRecord`] on edit-start, discarded on cancel, rebuilt into
//! API-shaped entity arrays on save.
//!
//! The phase rename operator lives here because it must touch every store
//! in lockstep: the conflict check runs before any mutation and the
//! per-store rewrites are infallible, so a rename either fully applies
//! across all five stores and the totals map or nothing changes.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use fieldsheet_domain::utils::numeric::{normalize, parse_hours};
use fieldsheet_domain::{
    EmployeeEntry, EquipmentEntry, FieldSheetError, Result, SavePayload, SimpleEntry,
    TimesheetRecord,
};

use crate::store::{EmployeeStore, EquipmentStore, SimpleCategory, SimpleStore};

/// Mutable working state for one edit session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkingCopy {
    pub employees: EmployeeStore,
    pub equipment: EquipmentStore,
    pub materials: SimpleStore,
    pub vendors: SimpleStore,
    pub dumping_sites: SimpleStore,
    total_quantities: BTreeMap<String, String>,
    notes: String,
}

impl WorkingCopy {
    /// Snapshot a timesheet record into a fresh working copy.
    #[must_use]
    pub fn from_record(record: &TimesheetRecord) -> Self {
        Self {
            employees: EmployeeStore::from_entries(&record.employees),
            equipment: EquipmentStore::from_entries(&record.equipment),
            materials: SimpleStore::from_entries(&record.materials),
            vendors: SimpleStore::from_entries(&record.vendors),
            dumping_sites: SimpleStore::from_entries(&record.dumping_sites),
            total_quantities: record
                .total_quantities
                .iter()
                .map(|(phase, quantity)| (phase.clone(), normalize(quantity)))
                .collect(),
            notes: record.notes.clone(),
        }
    }

    /// The simple-category store for `category`.
    #[must_use]
    pub fn simple_store(&self, category: SimpleCategory) -> &SimpleStore {
        match category {
            SimpleCategory::Materials => &self.materials,
            SimpleCategory::Vendors => &self.vendors,
            SimpleCategory::DumpingSites => &self.dumping_sites,
        }
    }

    /// Mutable access to the simple-category store for `category`.
    pub fn simple_store_mut(&mut self, category: SimpleCategory) -> &mut SimpleStore {
        match category {
            SimpleCategory::Materials => &mut self.materials,
            SimpleCategory::Vendors => &mut self.vendors,
            SimpleCategory::DumpingSites => &mut self.dumping_sites,
        }
    }

    /// Union of every phase-code key present in any category store or the
    /// total-quantities map.
    #[must_use]
    pub fn active_phase_set(&self) -> BTreeSet<String> {
        let mut phases = BTreeSet::new();
        self.employees.phase_map().collect_phases(&mut phases);
        self.equipment.phase_map().collect_phases(&mut phases);
        self.materials.phase_map().collect_phases(&mut phases);
        self.vendors.phase_map().collect_phases(&mut phases);
        self.dumping_sites.phase_map().collect_phases(&mut phases);
        phases.extend(self.total_quantities.keys().cloned());
        phases
    }

    /// Rename a phase code across all five stores and the total-quantities
    /// map.
    ///
    /// The new code is trimmed and uppercased. Renaming onto a code that
    /// is already active is rejected with
    /// [`FieldSheetError::RenameConflict`] - the operator never merges
    /// values across two live codes, the caller must consolidate manually
    /// first.
    pub fn rename_phase(&mut self, old: &str, new: &str) -> Result<()> {
        let new_code = new.trim().to_uppercase();
        if new_code.is_empty() {
            return Err(FieldSheetError::InvalidPhaseCode(
                "phase code cannot be empty".to_string(),
            ));
        }
        if new_code == old {
            return Ok(());
        }
        if self.active_phase_set().contains(&new_code) {
            return Err(FieldSheetError::RenameConflict(new_code));
        }

        self.employees.rename_phase(old, &new_code);
        self.equipment.rename_phase(old, &new_code);
        self.materials.rename_phase(old, &new_code);
        self.vendors.rename_phase(old, &new_code);
        self.dumping_sites.rename_phase(old, &new_code);
        if let Some(quantity) = self.total_quantities.remove(old) {
            self.total_quantities.insert(new_code, quantity);
        }
        Ok(())
    }

    /// Current total quantity for a phase; absent reads as `"0"`.
    #[must_use]
    pub fn total_quantity(&self, phase: &str) -> String {
        self.total_quantities
            .get(phase)
            .filter(|v| !v.is_empty())
            .cloned()
            .unwrap_or_else(|| "0".to_string())
    }

    /// Normalize and commit a total-quantity value. Total quantities are
    /// never quarter-rounded.
    pub fn set_total_quantity(&mut self, phase: &str, raw: &str) -> String {
        let value = normalize(raw);
        self.total_quantities.insert(phase.to_string(), value.clone());
        value
    }

    /// Session notes text.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Replace the session notes text.
    pub fn set_notes(&mut self, notes: &str) {
        self.notes = notes.to_string();
    }

    /// Rebuild the API-shaped save payload: the original entity objects
    /// with their per-phase maps (and ticket counts) replaced by the
    /// working-copy values, non-positive values omitted throughout.
    #[must_use]
    pub fn build_save_payload(&self, record: &TimesheetRecord) -> SavePayload {
        SavePayload {
            notes: self.notes.clone(),
            employees: self.rebuild_employees(&record.employees),
            equipment: self.rebuild_equipment(&record.equipment),
            materials: rebuild_simple(&self.materials, &record.materials),
            vendors: rebuild_simple(&self.vendors, &record.vendors),
            dumping_sites: rebuild_simple(&self.dumping_sites, &record.dumping_sites),
            total_quantities: self
                .total_quantities
                .iter()
                .filter(|(_, quantity)| parse_hours(quantity) > 0.0)
                .map(|(phase, quantity)| (phase.clone(), quantity.clone()))
                .collect::<HashMap<_, _>>(),
        }
    }

    fn rebuild_employees(&self, originals: &[EmployeeEntry]) -> Vec<EmployeeEntry> {
        originals
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let mut rebuilt = entry.clone();
                rebuilt.hours_per_phase = self.employees.export(&entry.key(index));
                rebuilt
            })
            .collect()
    }

    fn rebuild_equipment(&self, originals: &[EquipmentEntry]) -> Vec<EquipmentEntry> {
        originals
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let mut rebuilt = entry.clone();
                rebuilt.hours_per_phase = self.equipment.export(&entry.key(index));
                rebuilt
            })
            .collect()
    }
}

fn rebuild_simple(store: &SimpleStore, originals: &[SimpleEntry]) -> Vec<SimpleEntry> {
    originals
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let key = entry.key(index);
            let mut rebuilt = entry.clone();
            rebuilt.quantities_per_phase = store.export(&key);
            rebuilt.ticket_count = store.ticket_count(&key);
            rebuilt
        })
        .collect()
}
