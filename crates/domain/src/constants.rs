//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! engine. Thresholds live here rather than at their use sites since they
//! plausibly vary by jurisdiction or union agreement.

/// Hard ceiling on one employee's total hours for a single work day.
/// A mutation that would push the total past this value is rejected.
pub const MAX_DAILY_EMPLOYEE_HOURS: f64 = 24.0;

/// Advisory threshold for long shifts. Employees whose daily total is
/// strictly greater than this are flagged, non-blocking.
pub const OVERTIME_ADVISORY_HOURS: f64 = 9.0;

/// Granularity hour fields are rounded to on commit.
pub const QUARTER_HOUR_STEP: f64 = 0.25;

/// Maximum number of labor class codes attached to one employee.
pub const MAX_CLASS_CODES_PER_EMPLOYEE: usize = 2;
