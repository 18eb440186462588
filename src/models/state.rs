//! The overall application state: the sole unit of persistence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{decode_entry, DaySelection, MenuCatalog, MonthKey, SlotConfig};

/// Plans for one month: day-of-month (as a string key) to encoded plan line.
pub type MonthPlans = BTreeMap<String, String>;

/// The aggregate persisted state: menu catalog, plans, and per-day slot
/// configuration.
///
/// Loaded once at startup, mutated in memory by the UI handlers, and written
/// back wholesale on save. Day keys are stored as strings (`"1"`..`"31"`) to
/// match the on-disk format of the legacy files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlannerState {
    /// Selectable items per category.
    pub menus: MenuCatalog,
    /// Month key → day → encoded plan line.
    #[serde(default)]
    pub plans: BTreeMap<String, MonthPlans>,
    /// Month key → day → slot configuration.
    #[serde(default)]
    pub day_slots: BTreeMap<String, BTreeMap<String, SlotConfig>>,
}

impl PlannerState {
    /// A state with default menus and no plans.
    #[must_use]
    pub fn with_default_menus() -> Self {
        Self {
            menus: MenuCatalog::with_defaults(),
            ..Self::default()
        }
    }

    /// All stored plan lines for one month, if any.
    #[must_use]
    pub fn month_plans(&self, month: MonthKey) -> Option<&MonthPlans> {
        self.plans.get(&month.to_string())
    }

    /// The stored plan line for one day, if any.
    #[must_use]
    pub fn entry(&self, month: MonthKey, day: u32) -> Option<&str> {
        self.plans
            .get(&month.to_string())?
            .get(&day.to_string())
            .map(String::as_str)
    }

    /// Stores the plan line for one day, replacing any previous value.
    pub fn set_entry(&mut self, month: MonthKey, day: u32, line: String) {
        self.plans
            .entry(month.to_string())
            .or_default()
            .insert(day.to_string(), line);
    }

    /// The decoded selection for one day (empty if nothing is stored).
    #[must_use]
    pub fn selection_for(&self, month: MonthKey, day: u32) -> DaySelection {
        self.entry(month, day)
            .filter(|line| !line.trim().is_empty())
            .map_or_else(DaySelection::new, decode_entry)
    }

    /// The slot configuration for one day, defaulting to one row per
    /// category when unset.
    #[must_use]
    pub fn slots_for(&self, month: MonthKey, day: u32) -> SlotConfig {
        self.day_slots
            .get(&month.to_string())
            .and_then(|days| days.get(&day.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    /// Stores the slot configuration for one day.
    pub fn set_slots(&mut self, month: MonthKey, day: u32, slots: SlotConfig) {
        self.day_slots
            .entry(month.to_string())
            .or_default()
            .insert(day.to_string(), slots);
    }
}
