use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fieldsheet_core::review::ports::{TimesheetReader, TimesheetWriter};
use fieldsheet_domain::{
    FieldSheetError, Result as DomainResult, SavePayload, TimesheetRecord,
};
use uuid::Uuid;

/// In-memory mock backend implementing both timesheet ports.
///
/// Holds one record and the job's canonical phase list, records every
/// payload handed to the writer, and exposes failure toggles so the
/// Load/Save failure paths can be driven deterministically.
#[derive(Default, Clone)]
pub struct MockTimesheetBackend {
    record: Arc<Mutex<Option<TimesheetRecord>>>,
    phase_codes: Arc<Mutex<Vec<String>>>,
    saved_payloads: Arc<Mutex<Vec<SavePayload>>>,
    fail_loads: Arc<Mutex<bool>>,
    fail_saves: Arc<Mutex<bool>>,
}

impl MockTimesheetBackend {
    /// Create a new mock seeded with a record and its canonical phases.
    pub fn new(record: TimesheetRecord, phase_codes: Vec<String>) -> Self {
        Self {
            record: Arc::new(Mutex::new(Some(record))),
            phase_codes: Arc::new(Mutex::new(phase_codes)),
            ..Self::default()
        }
    }

    /// Make subsequent `fetch_timesheet` calls fail.
    pub fn fail_loads(&self, fail: bool) {
        *self.fail_loads.lock().unwrap() = fail;
    }

    /// Make subsequent `save_timesheet` calls fail.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// Every payload successfully handed to the writer, oldest first.
    pub fn saved_payloads(&self) -> Vec<SavePayload> {
        self.saved_payloads.lock().unwrap().clone()
    }

    /// The most recent saved payload, if any.
    pub fn last_saved(&self) -> Option<SavePayload> {
        self.saved_payloads.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TimesheetReader for MockTimesheetBackend {
    async fn fetch_timesheet(&self, id: Uuid) -> DomainResult<TimesheetRecord> {
        if *self.fail_loads.lock().unwrap() {
            return Err(FieldSheetError::Load("backend unavailable".to_string()));
        }
        self.record
            .lock()
            .unwrap()
            .clone()
            .filter(|record| record.id == id)
            .ok_or_else(|| FieldSheetError::NotFound(format!("timesheet {id}")))
    }

    async fn fetch_phase_codes(&self, _job_code: &str) -> DomainResult<Vec<String>> {
        Ok(self.phase_codes.lock().unwrap().clone())
    }
}

#[async_trait]
impl TimesheetWriter for MockTimesheetBackend {
    async fn save_timesheet(&self, _id: Uuid, payload: &SavePayload) -> DomainResult<()> {
        if *self.fail_saves.lock().unwrap() {
            return Err(FieldSheetError::Save("backend rejected the payload".to_string()));
        }
        self.saved_payloads.lock().unwrap().push(payload.clone());
        Ok(())
    }
}
