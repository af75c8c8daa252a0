use std::collections::HashMap;

use chrono::NaiveDate;
use fieldsheet_domain::{
    EmployeeEntry, EquipmentEntry, EquipmentHours, JobRef, SimpleEntry, TimesheetRecord,
};
use uuid::Uuid;

/// Fixed id used by [`crew_day`] so tests can reload the same record.
pub fn record_id() -> Uuid {
    Uuid::from_u128(0x4242)
}

/// A representative one-day crew timesheet: two employees, one excavator,
/// one material line, one vendor line, one dumping-site line, and a
/// total-quantity entry, spread over canonical phases `PH100`..`PH300`.
pub fn crew_day() -> TimesheetRecord {
    TimesheetRecord {
        id: record_id(),
        work_date: NaiveDate::from_ymd_opt(2026, 3, 17).unwrap(),
        job: JobRef {
            code: "JOB-42".to_string(),
            phase_codes: canonical_phases(),
        },
        weather: Some("Overcast, 48F".to_string()),
        location: Some("North retention pond".to_string()),
        notes: "Night shift prep".to_string(),
        employees: vec![
            EmployeeEntry {
                id: Some("emp-1".to_string()),
                name: "J. Smith".to_string(),
                class_codes: vec!["OP".to_string(), "LAB".to_string()],
                hours_per_phase: HashMap::from([(
                    "PH100".to_string(),
                    HashMap::from([("OP".to_string(), "8".to_string())]),
                )]),
            },
            EmployeeEntry {
                id: None,
                name: "R. Cruz".to_string(),
                class_codes: vec!["LAB".to_string()],
                hours_per_phase: HashMap::from([(
                    "PH200".to_string(),
                    HashMap::from([("LAB".to_string(), "6.5".to_string())]),
                )]),
            },
        ],
        equipment: vec![EquipmentEntry {
            id: Some("eq-1".to_string()),
            name: "Excavator 320".to_string(),
            meter_start: Some(1204.0),
            meter_stop: Some(1212.5),
            hours_per_phase: HashMap::from([(
                "PH100".to_string(),
                EquipmentHours { reg: "6".to_string(), standby: "2".to_string() },
            )]),
        }],
        materials: vec![SimpleEntry {
            id: Some("mat-1".to_string()),
            name: "3/4 crushed rock".to_string(),
            unit: "ton".to_string(),
            quantities_per_phase: HashMap::from([("PH200".to_string(), "14".to_string())]),
            ticket_count: 2,
        }],
        vendors: vec![SimpleEntry {
            id: Some("ven-1".to_string()),
            name: "Acme Trucking".to_string(),
            unit: "load".to_string(),
            quantities_per_phase: HashMap::from([("PH300".to_string(), "5".to_string())]),
            ticket_count: 5,
        }],
        dumping_sites: vec![SimpleEntry {
            id: Some("dmp-1".to_string()),
            name: "County landfill".to_string(),
            unit: "load".to_string(),
            quantities_per_phase: HashMap::from([("PH300".to_string(), "3".to_string())]),
            ticket_count: 3,
        }],
        total_quantities: HashMap::from([("PH100".to_string(), "20".to_string())]),
    }
}

/// Canonical phase list for [`crew_day`]'s job.
pub fn canonical_phases() -> Vec<String> {
    vec!["PH100".to_string(), "PH200".to_string(), "PH300".to_string()]
}
