//! Equipment category store
//!
//! Equipment hours carry two independent sub-fields per phase: active
//! (REG) and standby (S.B.). There is no cross-phase cap; meter readings
//! stay on the entity and are not edited here.

use std::collections::HashMap;

use fieldsheet_domain::utils::numeric::{normalize, parse_hours};
use fieldsheet_domain::{EquipmentEntry, EquipmentHours};

use super::{PhaseMap, PhaseValue};

/// REG/standby pair for one equipment unit on one phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentCell {
    pub reg: String,
    pub standby: String,
}

impl PhaseValue for EquipmentCell {
    fn total(&self) -> f64 {
        parse_hours(&self.reg) + parse_hours(&self.standby)
    }

    fn is_blank(&self) -> bool {
        self.reg.trim().is_empty() && self.standby.trim().is_empty()
    }
}

/// Which sub-field of an equipment cell a mutation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentField {
    Reg,
    Standby,
}

/// Per-phase totals for the equipment category keep the REG/standby split.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EquipmentPhaseTotal {
    pub reg: f64,
    pub standby: f64,
}

/// Working copy of every equipment unit's per-phase hours.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentStore {
    map: PhaseMap<EquipmentCell>,
}

impl EquipmentStore {
    /// Snapshot the equipment entries of a timesheet into a working copy.
    #[must_use]
    pub fn from_entries(entries: &[EquipmentEntry]) -> Self {
        let mut store = Self::default();
        for (index, entry) in entries.iter().enumerate() {
            let key = entry.key(index);
            for (phase, hours) in &entry.hours_per_phase {
                let cell = store.map.cell_mut(&key, phase);
                cell.reg = normalize(&hours.reg);
                cell.standby = normalize(&hours.standby);
            }
        }
        store
    }

    /// Current value of one sub-field; absent cells read as `"0"`.
    #[must_use]
    pub fn get(&self, entity: &str, phase: &str, field: EquipmentField) -> String {
        self.map
            .get(entity, phase)
            .map(|cell| match field {
                EquipmentField::Reg => cell.reg.clone(),
                EquipmentField::Standby => cell.standby.clone(),
            })
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "0".to_string())
    }

    /// Normalize and commit one sub-field. Equipment has no hour cap.
    pub fn set(&mut self, entity: &str, phase: &str, field: EquipmentField, raw: &str) -> String {
        let value = normalize(raw);
        let cell = self.map.cell_mut(entity, phase);
        match field {
            EquipmentField::Reg => cell.reg = value.clone(),
            EquipmentField::Standby => cell.standby = value.clone(),
        }
        value
    }

    /// Per-phase totals, keeping the REG/standby split.
    #[must_use]
    pub fn total_for_phase(&self, phase: &str) -> EquipmentPhaseTotal {
        let mut total = EquipmentPhaseTotal::default();
        for (_, row) in self.map.iter() {
            if let Some(cell) = row.get(phase) {
                total.reg += parse_hours(&cell.reg);
                total.standby += parse_hours(&cell.standby);
            }
        }
        total
    }

    /// The underlying phase map, for the aggregation engine.
    #[must_use]
    pub fn phase_map(&self) -> &PhaseMap<EquipmentCell> {
        &self.map
    }

    /// Rewrite a phase key across every equipment row.
    pub fn rename_phase(&mut self, old: &str, new: &str) {
        self.map.rename_phase(old, new);
    }

    /// Rebuild one unit's wire-shaped hour map from the working copy.
    ///
    /// Phases where neither sub-field is positive are omitted; within a
    /// kept phase, a non-positive sub-field is sent as `""`.
    #[must_use]
    pub fn export(&self, entity: &str) -> HashMap<String, EquipmentHours> {
        let mut out = HashMap::new();
        if let Some(row) = self.map.row(entity) {
            for (phase, cell) in row {
                let reg = parse_hours(&cell.reg);
                let standby = parse_hours(&cell.standby);
                if reg > 0.0 || standby > 0.0 {
                    out.insert(
                        phase.clone(),
                        EquipmentHours {
                            reg: if reg > 0.0 { cell.reg.clone() } else { String::new() },
                            standby: if standby > 0.0 {
                                cell.standby.clone()
                            } else {
                                String::new()
                            },
                        },
                    );
                }
            }
        }
        out
    }
}
