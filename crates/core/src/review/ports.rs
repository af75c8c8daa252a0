//! Port interfaces for the external timesheet APIs
//!
//! These traits define the boundaries between the review engine and
//! infrastructure implementations. The engine is a pure in-memory
//! transform between the read shape and the write shape; transport and
//! persistence live behind these ports.

use async_trait::async_trait;
use fieldsheet_domain::{Result, SavePayload, TimesheetRecord};
use uuid::Uuid;

/// Trait for fetching timesheets and canonical phase lists
#[async_trait]
pub trait TimesheetReader: Send + Sync {
    /// Fetch one timesheet record by id
    async fn fetch_timesheet(&self, id: Uuid) -> Result<TimesheetRecord>;

    /// Fetch the canonical phase-code list for a job
    async fn fetch_phase_codes(&self, job_code: &str) -> Result<Vec<String>>;
}

/// Trait for persisting edited timesheets
#[async_trait]
pub trait TimesheetWriter: Send + Sync {
    /// Persist a rebuilt save payload for one timesheet
    async fn save_timesheet(&self, id: Uuid, payload: &SavePayload) -> Result<()>;
}
