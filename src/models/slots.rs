//! Per-day slot configuration: how many selection rows each category shows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Number of selection rows per category for a single day.
///
/// Every category defaults to one row. Counts are clamped to a minimum of
/// one: a category with zero slots is not representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotConfig {
    counts: BTreeMap<Category, u32>,
}

impl SlotConfig {
    /// Slot count for one category, never below 1.
    #[must_use]
    pub fn get(&self, category: Category) -> u32 {
        self.counts.get(&category).copied().unwrap_or(1).max(1)
    }

    /// Sets the slot count for a category, clamped to a minimum of 1.
    pub fn set(&mut self, category: Category, count: u32) {
        self.counts.insert(category, count.max(1));
    }

    /// Increments the slot count for a category.
    pub fn add_slot(&mut self, category: Category) {
        self.set(category, self.get(category) + 1);
    }

    /// Decrements the slot count for a category, stopping at 1.
    ///
    /// Returns true if a slot was actually removed.
    pub fn remove_slot(&mut self, category: Category) -> bool {
        let current = self.get(category);
        if current <= 1 {
            return false;
        }
        self.set(category, current - 1);
        true
    }

    /// Total number of rows across all categories.
    #[must_use]
    pub fn total(&self) -> u32 {
        Category::ALL.iter().map(|cat| self.get(*cat)).sum()
    }
}

impl Default for SlotConfig {
    fn default() -> Self {
        let mut counts = BTreeMap::new();
        for cat in Category::ALL {
            counts.insert(cat, 1);
        }
        Self { counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one_per_category() {
        let slots = SlotConfig::default();
        for cat in Category::ALL {
            assert_eq!(slots.get(cat), 1);
        }
        assert_eq!(slots.total(), 4);
    }

    #[test]
    fn test_get_never_below_one() {
        let mut slots = SlotConfig::default();
        slots.set(Category::Soup, 0);
        assert_eq!(slots.get(Category::Soup), 1);

        // Stored zero (e.g. from a hand-edited file) is clamped on read
        let json = r#"{"soup": 0}"#;
        let loaded: SlotConfig = serde_json::from_str(json).unwrap();
        assert_eq!(loaded.get(Category::Soup), 1);
    }

    #[test]
    fn test_add_and_remove_slot() {
        let mut slots = SlotConfig::default();
        slots.add_slot(Category::Side);
        slots.add_slot(Category::Side);
        assert_eq!(slots.get(Category::Side), 3);

        assert!(slots.remove_slot(Category::Side));
        assert_eq!(slots.get(Category::Side), 2);
    }

    #[test]
    fn test_remove_slot_stops_at_one() {
        let mut slots = SlotConfig::default();
        assert!(!slots.remove_slot(Category::Staple));
        assert_eq!(slots.get(Category::Staple), 1);
    }
}
