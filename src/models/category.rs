//! The fixed set of meal categories.

use serde::{Deserialize, Serialize};

/// One of the four fixed meal categories.
///
/// The set and its order are fixed for the lifetime of the application:
/// every plan entry stores exactly one segment per category, in this order,
/// and the persisted JSON keys are the lowercase variant names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Staple food (rice, noodles, ...)
    Staple,
    /// Soup or stew
    Soup,
    /// Side dish
    Side,
    /// Everything else (snacks, fruit, eating out, ...)
    Other,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 4] = [
        Category::Staple,
        Category::Soup,
        Category::Side,
        Category::Other,
    ];

    /// Number of categories. Plan entries always have this many segments.
    pub const COUNT: usize = Self::ALL.len();

    /// Display label for the UI and export.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Staple => "Staple",
            Category::Soup => "Soup",
            Category::Side => "Side",
            Category::Other => "Other",
        }
    }

    /// Position of this category in the canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Category::Staple => 0,
            Category::Soup => 1,
            Category::Side => 2,
            Category::Other => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        for (i, cat) in Category::ALL.iter().enumerate() {
            assert_eq!(cat.index(), i);
        }
        // Ord matches declaration order, so BTreeMap iteration is canonical
        assert!(Category::Staple < Category::Soup);
        assert!(Category::Soup < Category::Side);
        assert!(Category::Side < Category::Other);
    }

    #[test]
    fn test_serde_keys_are_lowercase() {
        let json = serde_json::to_string(&Category::Soup).unwrap();
        assert_eq!(json, "\"soup\"");

        let cat: Category = serde_json::from_str("\"other\"").unwrap();
        assert_eq!(cat, Category::Other);
    }
}
