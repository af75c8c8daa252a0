//! Timesheet record and work-entity types
//!
//! These mirror the read API's wire shape. The engine never creates or
//! deletes entities; it only rewrites their per-phase hour/quantity maps
//! (and ticket counts) inside an edit session.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Job reference carried by a timesheet: the job code plus the job's
/// canonical, ordered phase-code list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobRef {
    pub code: String,
    #[serde(default)]
    pub phase_codes: Vec<String>,
}

/// Hours for one equipment unit on one phase, split into active (REG) and
/// standby (S.B.) sub-fields. Values are numeric strings as edited.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentHours {
    #[serde(default)]
    pub reg: String,
    #[serde(default)]
    pub standby: String,
}

/// One employee on the timesheet.
///
/// `hours_per_phase` is keyed by phase code, then by labor class code.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub class_codes: Vec<String>,
    #[serde(default)]
    pub hours_per_phase: HashMap<String, HashMap<String, String>>,
}

/// One equipment unit on the timesheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meter_start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meter_stop: Option<f64>,
    #[serde(default)]
    pub hours_per_phase: HashMap<String, EquipmentHours>,
}

/// One material, vendor, or dumping-site line. The three categories share
/// a shape: one quantity per phase plus a ticket/load count that is not
/// tied to any phase.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimpleEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub quantities_per_phase: HashMap<String, String>,
    #[serde(default)]
    pub ticket_count: u32,
}

/// Root aggregate for one work-day of one crew/job.
///
/// Owned by the external backing store; the engine holds a read-only
/// snapshot of it plus mutable working copies during an edit session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetRecord {
    pub id: Uuid,
    pub work_date: NaiveDate,
    pub job: JobRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub employees: Vec<EmployeeEntry>,
    #[serde(default)]
    pub equipment: Vec<EquipmentEntry>,
    #[serde(default)]
    pub materials: Vec<SimpleEntry>,
    #[serde(default)]
    pub vendors: Vec<SimpleEntry>,
    #[serde(default)]
    pub dumping_sites: Vec<SimpleEntry>,
    /// Phase code -> total quantity, independent of the per-entity maps.
    #[serde(default)]
    pub total_quantities: HashMap<String, String>,
}

/// Derive a stable lookup key for an entity that may be missing its id.
///
/// Upstream data is not guaranteed clean: scanned tickets occasionally
/// arrive without server ids. Falls back to the entity name, then to the
/// collection index, so the engine degrades instead of panicking.
#[must_use]
pub fn entity_key(id: Option<&str>, name: &str, index: usize) -> String {
    match id {
        Some(id) if !id.trim().is_empty() => id.to_string(),
        _ if !name.trim().is_empty() => name.trim().to_string(),
        _ => format!("entry-{index}"),
    }
}

impl EmployeeEntry {
    /// Lookup key for this employee within its collection.
    #[must_use]
    pub fn key(&self, index: usize) -> String {
        entity_key(self.id.as_deref(), &self.name, index)
    }

    /// The class codes hours may be booked under, capped at
    /// [`MAX_CLASS_CODES_PER_EMPLOYEE`](crate::constants::MAX_CLASS_CODES_PER_EMPLOYEE).
    #[must_use]
    pub fn active_class_codes(&self) -> &[String] {
        let end = self.class_codes.len().min(crate::constants::MAX_CLASS_CODES_PER_EMPLOYEE);
        &self.class_codes[..end]
    }
}

impl EquipmentEntry {
    /// Lookup key for this equipment unit within its collection.
    #[must_use]
    pub fn key(&self, index: usize) -> String {
        entity_key(self.id.as_deref(), &self.name, index)
    }
}

impl SimpleEntry {
    /// Lookup key for this line within its collection.
    #[must_use]
    pub fn key(&self, index: usize) -> String {
        entity_key(self.id.as_deref(), &self.name, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_key_prefers_id() {
        assert_eq!(entity_key(Some("emp-7"), "J. Smith", 0), "emp-7");
    }

    #[test]
    fn test_entity_key_falls_back_to_name() {
        assert_eq!(entity_key(None, "J. Smith", 0), "J. Smith");
        assert_eq!(entity_key(Some("  "), "J. Smith", 0), "J. Smith");
    }

    #[test]
    fn test_active_class_codes_caps_at_two() {
        let entry = EmployeeEntry {
            id: None,
            name: "J. Smith".to_string(),
            class_codes: vec!["OP".to_string(), "LAB".to_string(), "FM".to_string()],
            hours_per_phase: HashMap::new(),
        };
        assert_eq!(entry.active_class_codes(), ["OP".to_string(), "LAB".to_string()]);
    }

    #[test]
    fn test_entity_key_falls_back_to_index() {
        assert_eq!(entity_key(None, "", 3), "entry-3");
        assert_eq!(entity_key(Some(""), "   ", 12), "entry-12");
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let mut hours = HashMap::new();
        hours.insert(
            "PH100".to_string(),
            HashMap::from([("OP".to_string(), "8.00".to_string())]),
        );
        let record = TimesheetRecord {
            id: Uuid::nil(),
            work_date: NaiveDate::from_ymd_opt(2026, 3, 17).unwrap(),
            job: JobRef { code: "JOB-42".to_string(), phase_codes: vec!["PH100".to_string()] },
            weather: Some("Clear".to_string()),
            location: None,
            notes: "North lot".to_string(),
            employees: vec![EmployeeEntry {
                id: Some("emp-1".to_string()),
                name: "J. Smith".to_string(),
                class_codes: vec!["OP".to_string()],
                hours_per_phase: hours,
            }],
            equipment: Vec::new(),
            materials: Vec::new(),
            vendors: Vec::new(),
            dumping_sites: Vec::new(),
            total_quantities: HashMap::new(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("workDate"));
        assert!(json.contains("hoursPerPhase"));

        let back: TimesheetRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
