//! Data models for menus, plans, and slot configuration.
//!
//! Models are independent of the UI and of storage: they only describe the
//! in-memory shape of the planner state and the plan-entry line format.

pub mod catalog;
pub mod category;
pub mod plan;
pub mod slots;
pub mod state;

// Re-export all model types
pub use catalog::MenuCatalog;
pub use category::Category;
pub use plan::{
    decode_entry, encode_entry, DaySelection, MonthKey, CATEGORY_SEPARATOR, ITEM_SEPARATOR,
};
pub use slots::SlotConfig;
pub use state::{MonthPlans, PlannerState};
