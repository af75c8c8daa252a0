//! Review session service - edit/save/cancel lifecycle
//!
//! All mutations are synchronous and happen on one logical session; the
//! only async boundaries are the port calls (fetch timesheet, fetch phase
//! codes, save). Guards run before anything is committed, so the service
//! never needs rollback machinery.

use std::sync::Arc;

use fieldsheet_domain::utils::numeric::round_to_quarter;
use fieldsheet_domain::{FieldSheetError, OvertimeAdvisory, Result, TimesheetRecord};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::ports::{TimesheetReader, TimesheetWriter};
use crate::aggregate::overtime_advisories;
use crate::resolver::resolve_active_phases;
use crate::store::{EmployeeStore, EquipmentField, SimpleCategory};
use crate::working_copy::WorkingCopy;

/// Edit lifecycle state.
///
/// Saving and Cancelling are transient passes through the corresponding
/// async methods; the session always lands back in one of these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Viewing,
    Editing,
}

/// Edit-session controller for one timesheet.
///
/// Owns the read-only record snapshot, the canonical phase list, and the
/// working copy of an active edit session. Mutations route through the
/// category stores' guard semantics; save rebuilds the API-shaped payload
/// and hands it to the writer port.
pub struct ReviewSession {
    reader: Arc<dyn TimesheetReader>,
    writer: Arc<dyn TimesheetWriter>,
    state: SessionState,
    record: Option<TimesheetRecord>,
    canonical_phases: Vec<String>,
    working: Option<WorkingCopy>,
    /// Phase code currently shown in the inline rename editor, if any.
    /// Force-closed on save and cancel.
    pending_rename: Option<String>,
    advisories: Vec<OvertimeAdvisory>,
}

impl ReviewSession {
    /// Create a new session over the given ports.
    pub fn new(reader: Arc<dyn TimesheetReader>, writer: Arc<dyn TimesheetWriter>) -> Self {
        Self {
            reader,
            writer,
            state: SessionState::Viewing,
            record: None,
            canonical_phases: Vec::new(),
            working: None,
            pending_rename: None,
            advisories: Vec::new(),
        }
    }

    /// Load canonical data for one timesheet.
    ///
    /// Any active edit session is discarded. On failure the session holds
    /// no record (empty/error state) and the error is returned.
    pub async fn load(&mut self, id: Uuid) -> Result<()> {
        self.state = SessionState::Viewing;
        self.working = None;
        self.pending_rename = None;

        match self.fetch(id).await {
            Ok((record, phases)) => {
                info!(
                    timesheet_id = %id,
                    job = %record.job.code,
                    employees = record.employees.len(),
                    "Timesheet loaded"
                );
                self.canonical_phases = phases;
                self.record = Some(record);
                self.refresh_advisories();
                Ok(())
            }
            Err(err) => {
                error!(timesheet_id = %id, error = %err, "Failed to load timesheet");
                self.record = None;
                self.canonical_phases.clear();
                self.advisories.clear();
                Err(err)
            }
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The loaded record snapshot, if any.
    #[must_use]
    pub fn record(&self) -> Option<&TimesheetRecord> {
        self.record.as_ref()
    }

    /// The job's canonical phase-code list.
    #[must_use]
    pub fn canonical_phases(&self) -> &[String] {
        &self.canonical_phases
    }

    /// The active edit session's working copy, if editing.
    #[must_use]
    pub fn working(&self) -> Option<&WorkingCopy> {
        self.working.as_ref()
    }

    /// Current long-shift advisories, refreshed on load and after every
    /// employee mutation.
    #[must_use]
    pub fn advisories(&self) -> &[OvertimeAdvisory] {
        &self.advisories
    }

    /// Notes text as currently visible: the working copy's during an edit
    /// session, the record's otherwise.
    #[must_use]
    pub fn notes(&self) -> &str {
        match (&self.working, &self.record) {
            (Some(working), _) => working.notes(),
            (None, Some(record)) => &record.notes,
            (None, None) => "",
        }
    }

    /// The ordered active phase list for rendering and aggregation.
    ///
    /// Empty when no phase data exists yet; renderers treat that as "no
    /// columns", not an error.
    #[must_use]
    pub fn active_phases(&self) -> Vec<String> {
        let active = match (&self.working, &self.record) {
            (Some(working), _) => working.active_phase_set(),
            (None, Some(record)) => WorkingCopy::from_record(record).active_phase_set(),
            (None, None) => return Vec::new(),
        };
        resolve_active_phases(&self.canonical_phases, &active)
    }

    /// Start an edit session: snapshot the record into working copies and
    /// unlock mutations. No data changes.
    pub fn begin_edit(&mut self) -> Result<()> {
        if self.state == SessionState::Editing {
            return Err(FieldSheetError::EditState("edit session already active".to_string()));
        }
        let record = self
            .record
            .as_ref()
            .ok_or_else(|| FieldSheetError::NotFound("no timesheet loaded".to_string()))?;
        self.working = Some(WorkingCopy::from_record(record));
        self.state = SessionState::Editing;
        Ok(())
    }

    /// Normalize and commit one employee hour cell, subject to the daily
    /// hour cap. Returns the normalized value.
    pub fn set_employee_hours(
        &mut self,
        entity: &str,
        phase: &str,
        class: &str,
        raw: &str,
    ) -> Result<String> {
        let result = self.working_mut()?.employees.set(entity, phase, class, raw);
        match result {
            Ok(value) => {
                self.refresh_advisories();
                Ok(value)
            }
            Err(err) => {
                if let FieldSheetError::HoursCapExceeded { employee, total } = &err {
                    warn!(employee = %employee, total, "Hour cap exceeded; mutation rejected");
                }
                Err(err)
            }
        }
    }

    /// Quarter-round one employee hour cell on field commit.
    pub fn commit_employee_hours(
        &mut self,
        entity: &str,
        phase: &str,
        class: &str,
    ) -> Result<String> {
        let current = self.working_mut()?.employees.get(entity, phase, class);
        self.set_employee_hours(entity, phase, class, &round_to_quarter(&current))
    }

    /// Normalize and commit one equipment sub-field. No cap applies.
    pub fn set_equipment_hours(
        &mut self,
        entity: &str,
        phase: &str,
        field: EquipmentField,
        raw: &str,
    ) -> Result<String> {
        Ok(self.working_mut()?.equipment.set(entity, phase, field, raw))
    }

    /// Quarter-round one equipment sub-field on field commit.
    pub fn commit_equipment_hours(
        &mut self,
        entity: &str,
        phase: &str,
        field: EquipmentField,
    ) -> Result<String> {
        let current = self.working_mut()?.equipment.get(entity, phase, field);
        self.set_equipment_hours(entity, phase, field, &round_to_quarter(&current))
    }

    /// Normalize and commit one simple-category quantity cell. Quantities
    /// are never quarter-rounded.
    pub fn set_simple_quantity(
        &mut self,
        category: SimpleCategory,
        entity: &str,
        phase: &str,
        raw: &str,
    ) -> Result<String> {
        Ok(self.working_mut()?.simple_store_mut(category).set(entity, phase, raw))
    }

    /// Replace one entity's ticket/load count.
    pub fn set_ticket_count(
        &mut self,
        category: SimpleCategory,
        entity: &str,
        count: u32,
    ) -> Result<()> {
        self.working_mut()?.simple_store_mut(category).set_ticket_count(entity, count);
        Ok(())
    }

    /// Normalize and commit one total-quantity value.
    pub fn set_total_quantity(&mut self, phase: &str, raw: &str) -> Result<String> {
        Ok(self.working_mut()?.set_total_quantity(phase, raw))
    }

    /// Replace the notes text.
    pub fn set_notes(&mut self, notes: &str) -> Result<()> {
        self.working_mut()?.set_notes(notes);
        Ok(())
    }

    /// Mark a phase as having its inline rename editor open.
    pub fn open_rename_editor(&mut self, phase: &str) -> Result<()> {
        if self.state != SessionState::Editing {
            return Err(FieldSheetError::EditState(
                "renaming requires an active edit session".to_string(),
            ));
        }
        self.pending_rename = Some(phase.to_string());
        Ok(())
    }

    /// Phase whose inline rename editor is open, if any.
    #[must_use]
    pub fn pending_rename(&self) -> Option<&str> {
        self.pending_rename.as_deref()
    }

    /// Rename a phase code across all stores and the totals map.
    ///
    /// On success the rename editor closes; on conflict it stays open so
    /// the user can retry with a different code.
    pub fn rename_phase(&mut self, old: &str, new: &str) -> Result<()> {
        let result = self.working_mut()?.rename_phase(old, new);
        match result {
            Ok(()) => {
                self.pending_rename = None;
                Ok(())
            }
            Err(err) => {
                if let FieldSheetError::RenameConflict(code) = &err {
                    warn!(code = %code, "Phase rename conflict; consolidate values manually");
                }
                Err(err)
            }
        }
    }

    /// Rebuild the save payload from the working copy and hand it to the
    /// write API.
    ///
    /// On success the session reloads canonical data and returns to
    /// Viewing. On failure it stays in Editing with the working copy
    /// intact, so no edits are lost.
    pub async fn save(&mut self) -> Result<()> {
        if self.state != SessionState::Editing {
            return Err(FieldSheetError::EditState(
                "save requires an active edit session".to_string(),
            ));
        }
        self.pending_rename = None;

        let record = self
            .record
            .as_ref()
            .ok_or_else(|| FieldSheetError::NotFound("no timesheet loaded".to_string()))?;
        let working = self
            .working
            .as_ref()
            .ok_or_else(|| FieldSheetError::Internal("editing without a working copy".to_string()))?;

        let id = record.id;
        let payload = working.build_save_payload(record);

        if let Err(err) = self.writer.save_timesheet(id, &payload).await {
            error!(timesheet_id = %id, error = %err, "Failed to save timesheet; edits retained");
            return Err(err);
        }

        info!(timesheet_id = %id, "Timesheet saved");
        self.load(id).await
    }

    /// Discard the working copy and reload canonical data.
    pub async fn cancel(&mut self) -> Result<()> {
        if self.state != SessionState::Editing {
            return Err(FieldSheetError::EditState(
                "cancel requires an active edit session".to_string(),
            ));
        }
        let id = self
            .record
            .as_ref()
            .ok_or_else(|| FieldSheetError::NotFound("no timesheet loaded".to_string()))?
            .id;

        self.pending_rename = None;
        self.working = None;
        self.state = SessionState::Viewing;
        info!(timesheet_id = %id, "Edit session cancelled");
        self.load(id).await
    }

    async fn fetch(&self, id: Uuid) -> Result<(TimesheetRecord, Vec<String>)> {
        let record = self.reader.fetch_timesheet(id).await?;
        let phases = self.reader.fetch_phase_codes(&record.job.code).await?;
        Ok((record, phases))
    }

    fn working_mut(&mut self) -> Result<&mut WorkingCopy> {
        if self.state != SessionState::Editing {
            return Err(FieldSheetError::EditState(
                "mutation requires an active edit session".to_string(),
            ));
        }
        self.working
            .as_mut()
            .ok_or_else(|| FieldSheetError::Internal("editing without a working copy".to_string()))
    }

    fn refresh_advisories(&mut self) {
        if let Some(working) = &self.working {
            self.advisories = overtime_advisories(&working.employees);
        } else if let Some(record) = &self.record {
            self.advisories = overtime_advisories(&EmployeeStore::from_entries(&record.employees));
        } else {
            self.advisories.clear();
        }
    }
}
