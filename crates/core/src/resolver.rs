//! Phase-code set resolver
//!
//! Derives the ordered set of phase codes currently active across a
//! timesheet's working copies, reconciling the job's canonical phase list
//! with ad-hoc renames and additions. Phase columns render as a visually
//! stable grid: a rename must not reflow unrelated columns, and genuinely
//! new codes must land deterministically.

use std::collections::BTreeSet;

/// Resolve the ordered active phase list.
///
/// * `canonical` - the job's authoritative phase-code list, in its
///   original order
/// * `active` - every phase-code key present in any category store or the
///   total-quantities map
///
/// Active codes outside the canonical list are sorted; walking the
/// canonical list in order, still-active canonical codes are emitted in
/// place, and each vacated canonical slot consumes the next substitute
/// from the top of that sorted queue (renamed codes occupy the visual
/// slot their predecessor held). Slots left over once the queue is dry
/// are dropped; queue entries left over are appended in sorted order.
///
/// An empty active set resolves to an empty list - "no phase data yet",
/// not an error.
#[must_use]
pub fn resolve_active_phases(canonical: &[String], active: &BTreeSet<String>) -> Vec<String> {
    let mut extras: Vec<&String> =
        active.iter().filter(|code| !canonical.contains(*code)).collect();
    // BTreeSet iteration already sorted ascending; substitutions consume
    // from the top end, leftovers append in ascending order.
    let mut result = Vec::with_capacity(active.len());

    for code in canonical {
        if active.contains(code) {
            result.push(code.clone());
        } else if let Some(substitute) = extras.pop() {
            result.push(substitute.clone());
        }
    }

    result.extend(extras.into_iter().cloned());
    result
}
