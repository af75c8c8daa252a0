//! # FieldSheet Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Category state stores over per-phase working copies
//! - The aggregation engine and phase-code set resolver
//! - The rename/merge operator
//! - The edit-session controller and its port interfaces
//!
//! ## Architecture Principles
//! - Only depends on `fieldsheet-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod aggregate;
pub mod resolver;
pub mod review;
pub mod store;
pub mod working_copy;

// Re-export specific items to avoid ambiguity
pub use aggregate::{
    equipment_total_for_phase, grand_total, overtime_advisories, total_for_entity,
    total_for_phase,
};
pub use resolver::resolve_active_phases;
pub use review::ports::{TimesheetReader, TimesheetWriter};
pub use review::service::{ReviewSession, SessionState};
pub use store::{
    ClassCell, EmployeeStore, EquipmentCell, EquipmentField, EquipmentPhaseTotal, EquipmentStore,
    PhaseMap, PhaseValue, SimpleCategory, SimpleStore,
};
pub use working_copy::WorkingCopy;
