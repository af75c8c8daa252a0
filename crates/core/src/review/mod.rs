//! Timesheet review/edit session
//!
//! The controller that owns the edit/save/cancel lifecycle, plus the port
//! interfaces for the external read and write APIs.

pub mod ports;
pub mod service;

pub use ports::{TimesheetReader, TimesheetWriter};
pub use service::{ReviewSession, SessionState};
