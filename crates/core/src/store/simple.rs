//! Simple category store (materials, vendors, dumping sites)
//!
//! The three "simple" categories share one shape: a single quantity per
//! phase plus a ticket/load count tracked per entity, outside any phase
//! and outside the quantity aggregation.

use std::collections::{BTreeMap, HashMap};

use fieldsheet_domain::utils::numeric::{normalize, parse_hours};
use fieldsheet_domain::SimpleEntry;

use super::PhaseMap;

/// Which of the three simple categories a mutation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleCategory {
    Materials,
    Vendors,
    DumpingSites,
}

impl SimpleCategory {
    /// Stable lowercase name, used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Materials => "materials",
            Self::Vendors => "vendors",
            Self::DumpingSites => "dumping_sites",
        }
    }
}

/// Working copy of one simple category's per-phase quantities and ticket
/// counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleStore {
    map: PhaseMap<String>,
    tickets: BTreeMap<String, u32>,
}

impl SimpleStore {
    /// Snapshot one simple-category collection into a working copy.
    #[must_use]
    pub fn from_entries(entries: &[SimpleEntry]) -> Self {
        let mut store = Self::default();
        for (index, entry) in entries.iter().enumerate() {
            let key = entry.key(index);
            store.tickets.insert(key.clone(), entry.ticket_count);
            for (phase, quantity) in &entry.quantities_per_phase {
                store.map.insert(&key, phase, normalize(quantity));
            }
        }
        store
    }

    /// Current quantity for one cell; absent cells read as `"0"`.
    #[must_use]
    pub fn get(&self, entity: &str, phase: &str) -> String {
        self.map
            .get(entity, phase)
            .filter(|v| !v.is_empty())
            .cloned()
            .unwrap_or_else(|| "0".to_string())
    }

    /// Normalize and commit one quantity cell. Quantities are never
    /// quarter-rounded.
    pub fn set(&mut self, entity: &str, phase: &str, raw: &str) -> String {
        let value = normalize(raw);
        self.map.insert(entity, phase, value.clone());
        value
    }

    /// Ticket/load count for one entity.
    #[must_use]
    pub fn ticket_count(&self, entity: &str) -> u32 {
        self.tickets.get(entity).copied().unwrap_or(0)
    }

    /// Replace one entity's ticket/load count.
    pub fn set_ticket_count(&mut self, entity: &str, count: u32) {
        self.tickets.insert(entity.to_string(), count);
    }

    /// The underlying phase map, for the aggregation engine.
    #[must_use]
    pub fn phase_map(&self) -> &PhaseMap<String> {
        &self.map
    }

    /// Rewrite a phase key across every row.
    pub fn rename_phase(&mut self, old: &str, new: &str) {
        self.map.rename_phase(old, new);
    }

    /// Rebuild one entity's wire-shaped quantity map, positive values only.
    #[must_use]
    pub fn export(&self, entity: &str) -> HashMap<String, String> {
        self.map
            .row(entity)
            .map(|row| {
                row.iter()
                    .filter(|(_, quantity)| parse_hours(quantity) > 0.0)
                    .map(|(phase, quantity)| (phase.clone(), quantity.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}
