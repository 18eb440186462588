//! Menu catalog: the selectable items for each category.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Built-in default items, used whenever a category is missing or empty.
const DEFAULT_STAPLE: &[&str] = &[
    "Rice",
    "Brown rice",
    "Multigrain rice",
    "Porridge",
    "Ramen",
    "Noodles",
    "Bibimbap",
    "Rice bowl",
    "Fried rice",
    "Pasta",
];

const DEFAULT_SOUP: &[&str] = &[
    "Seaweed soup",
    "Miso soup",
    "Kimchi stew",
    "Bean sprout soup",
    "Chicken soup",
    "Tomato soup",
    "Corn chowder",
    "Udon",
    "Dumpling soup",
    "Vegetable soup",
];

const DEFAULT_SIDE: &[&str] = &[
    "Kimchi",
    "Seasoned greens",
    "Rolled omelette",
    "Stir-fried pork",
    "Braised potatoes",
    "Braised tofu",
    "Spinach salad",
    "Cucumber salad",
    "Pickles",
    "Anchovy stir-fry",
];

const DEFAULT_OTHER: &[&str] = &[
    "Salad",
    "Fruit",
    "Yogurt",
    "Snack",
    "Rice cake",
    "Kimbap",
    "Lunch box",
    "Eating out",
    "Leftovers",
    "Other",
];

/// Ordered mapping from [`Category`] to its selectable menu items.
///
/// Items are unique within a category. A category is never allowed to stay
/// empty in a loaded catalog: [`MenuCatalog::merge_defaults`] refills any
/// missing or empty category with the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuCatalog {
    items: BTreeMap<Category, Vec<String>>,
}

impl MenuCatalog {
    /// Built-in default items for one category.
    #[must_use]
    pub const fn default_items(category: Category) -> &'static [&'static str] {
        match category {
            Category::Staple => DEFAULT_STAPLE,
            Category::Soup => DEFAULT_SOUP,
            Category::Side => DEFAULT_SIDE,
            Category::Other => DEFAULT_OTHER,
        }
    }

    /// Creates a catalog with the built-in defaults for every category.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut items = BTreeMap::new();
        for cat in Category::ALL {
            items.insert(
                cat,
                Self::default_items(cat)
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect(),
            );
        }
        Self { items }
    }

    /// Creates an empty catalog. Mainly useful in tests.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Items for one category (empty slice if the category has none).
    #[must_use]
    pub fn items(&self, category: Category) -> &[String] {
        self.items.get(&category).map_or(&[], Vec::as_slice)
    }

    /// True if every category has at least one item.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Category::ALL.iter().all(|cat| !self.items(*cat).is_empty())
    }

    /// Refills any missing or empty category with the built-in defaults.
    pub fn merge_defaults(&mut self) {
        for cat in Category::ALL {
            let entry = self.items.entry(cat).or_default();
            if entry.is_empty() {
                *entry = Self::default_items(cat)
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect();
            }
        }
    }

    /// Adds an item to a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed name is empty or already present in
    /// the category.
    pub fn add_item(&mut self, category: Category, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            anyhow::bail!("Menu item name cannot be empty");
        }
        let entry = self.items.entry(category).or_default();
        if entry.iter().any(|existing| existing == name) {
            anyhow::bail!("'{name}' already exists in {}", category.label());
        }
        entry.push(name.to_string());
        Ok(())
    }

    /// Removes an item from a category. Returns true if it was present.
    pub fn remove_item(&mut self, category: Category, name: &str) -> bool {
        if let Some(entry) = self.items.get_mut(&category) {
            if let Some(pos) = entry.iter().position(|existing| existing == name) {
                entry.remove(pos);
                return true;
            }
        }
        false
    }

    /// Replaces the whole catalog, refilling empty categories with defaults.
    ///
    /// Used when the menu editor commits its working copy.
    pub fn replace(&mut self, items: BTreeMap<Category, Vec<String>>) {
        self.items = items;
        self.merge_defaults();
    }

    /// A mutable working copy of the category/item mapping.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<Category, Vec<String>> {
        self.items.clone()
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_defaults_is_complete() {
        let catalog = MenuCatalog::with_defaults();
        assert!(catalog.is_complete());
        for cat in Category::ALL {
            assert_eq!(catalog.items(cat).len(), 10);
        }
    }

    #[test]
    fn test_add_item_rejects_duplicates() {
        let mut catalog = MenuCatalog::empty();
        catalog.add_item(Category::Staple, "Rice").unwrap();
        assert!(catalog.add_item(Category::Staple, "Rice").is_err());
        // Same name in a different category is fine
        catalog.add_item(Category::Other, "Rice").unwrap();
    }

    #[test]
    fn test_add_item_rejects_empty() {
        let mut catalog = MenuCatalog::empty();
        assert!(catalog.add_item(Category::Soup, "   ").is_err());
    }

    #[test]
    fn test_add_item_trims() {
        let mut catalog = MenuCatalog::empty();
        catalog.add_item(Category::Side, "  Kimchi  ").unwrap();
        assert_eq!(catalog.items(Category::Side), ["Kimchi"]);
    }

    #[test]
    fn test_remove_item() {
        let mut catalog = MenuCatalog::empty();
        catalog.add_item(Category::Soup, "Udon").unwrap();
        assert!(catalog.remove_item(Category::Soup, "Udon"));
        assert!(!catalog.remove_item(Category::Soup, "Udon"));
    }

    #[test]
    fn test_merge_defaults_fills_empty_categories() {
        let mut catalog = MenuCatalog::empty();
        catalog.add_item(Category::Staple, "Toast").unwrap();
        catalog.merge_defaults();

        // Custom category untouched, others refilled
        assert_eq!(catalog.items(Category::Staple), ["Toast"]);
        assert_eq!(
            catalog.items(Category::Soup).len(),
            MenuCatalog::default_items(Category::Soup).len()
        );
        assert!(catalog.is_complete());
    }

    #[test]
    fn test_serde_uses_category_keys() {
        let catalog = MenuCatalog::with_defaults();
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.contains("\"staple\""));
        assert!(json.contains("\"soup\""));

        let back: MenuCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
