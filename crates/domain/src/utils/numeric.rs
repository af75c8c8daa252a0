//! Pure numeric-input utilities for hour and quantity cells
//!
//! Free-text field input is canonicalized on every keystroke with
//! [`normalize`]; hour cells are additionally snapped to quarter hours on
//! commit with [`round_to_quarter`]. Quantity and ticket cells never
//! quarter-round.

use crate::constants::QUARTER_HOUR_STEP;

/// Canonicalize free-text numeric input.
///
/// Keeps ASCII digits and the first decimal point, discarding everything
/// else. A value starting with `.` is prefixed with `0`; leading zeros
/// collapse unless the value is `"0"` or begins `"0."`.
///
/// Never fails: input with no usable characters normalizes to `""`. The
/// function is idempotent, so re-normalizing a committed value is safe.
///
/// # Arguments
///
/// * `raw` - The field text as typed
///
/// # Examples
///
/// ```
/// use fieldsheet_domain::utils::numeric::normalize;
///
/// assert_eq!(normalize("007.5"), "7.5");
/// assert_eq!(normalize(".25"), "0.25");
/// assert_eq!(normalize("."), "0.");
/// assert_eq!(normalize("1a2b.3.4"), "12.34");
/// assert_eq!(normalize("abc"), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_point = false;

    for c in raw.chars() {
        if c.is_ascii_digit() {
            out.push(c);
        } else if c == '.' && !seen_point {
            seen_point = true;
            out.push('.');
        }
    }

    if out.starts_with('.') {
        out.insert(0, '0');
    }

    // "007" -> "7" but "0" and "0.5" keep their leading zero
    while out.len() > 1 && out.starts_with('0') && !out[1..].starts_with('.') {
        out.remove(0);
    }

    out
}

/// Snap an hour value to the nearest quarter hour.
///
/// Parses the input as a float, rounds to the nearest
/// [`QUARTER_HOUR_STEP`], and formats with exactly two decimal digits.
/// Unparsable or non-finite input yields `""`.
///
/// Applied on field commit rather than per keystroke, so intermediate
/// typing is not destructively rounded.
///
/// # Arguments
///
/// * `raw` - The committed field text
///
/// # Examples
///
/// ```
/// use fieldsheet_domain::utils::numeric::round_to_quarter;
///
/// assert_eq!(round_to_quarter("7.13"), "7.25");
/// assert_eq!(round_to_quarter("7.10"), "7.00");
/// assert_eq!(round_to_quarter("8"), "8.00");
/// assert_eq!(round_to_quarter(""), "");
/// ```
#[must_use]
pub fn round_to_quarter(raw: &str) -> String {
    let Ok(value) = raw.trim().parse::<f64>() else {
        return String::new();
    };
    if !value.is_finite() {
        return String::new();
    }

    let rounded = (value / QUARTER_HOUR_STEP).round() * QUARTER_HOUR_STEP;
    format!("{rounded:.2}")
}

/// Lenient parse used by aggregation: unparsable or non-finite input
/// counts as zero hours.
///
/// # Examples
///
/// ```
/// use fieldsheet_domain::utils::numeric::parse_hours;
///
/// assert_eq!(parse_hours("7.25"), 7.25);
/// assert_eq!(parse_hours(""), 0.0);
/// assert_eq!(parse_hours("n/a"), 0.0);
/// ```
#[must_use]
pub fn parse_hours(raw: &str) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}
