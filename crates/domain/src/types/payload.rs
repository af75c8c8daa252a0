//! Save payload and advisory types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::timesheet::{EmployeeEntry, EquipmentEntry, SimpleEntry};

/// Payload handed to the write API on save.
///
/// Each entity array element is the original entity object with its
/// per-phase map replaced by the rebuilt working-copy values; phase values
/// that normalized to zero or below are omitted rather than sent as "0".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavePayload {
    pub notes: String,
    pub employees: Vec<EmployeeEntry>,
    pub equipment: Vec<EquipmentEntry>,
    pub materials: Vec<SimpleEntry>,
    pub vendors: Vec<SimpleEntry>,
    pub dumping_sites: Vec<SimpleEntry>,
    /// Phase code -> quantity, positive values only.
    pub total_quantities: HashMap<String, String>,
}

/// Non-blocking long-shift advisory for one employee.
///
/// Distinct from the daily hard cap: the cap rejects the mutation, this
/// merely flags the employee for supervisor review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeAdvisory {
    pub entity_key: String,
    pub name: String,
    pub total_hours: f64,
}
