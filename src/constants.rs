//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "Mealboard";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "mealboard";

/// Consolidated data file holding menus, plans, and per-day slot counts.
pub const DATA_FILE_NAME: &str = "data.json";

/// Legacy menu catalog file, read only as a fallback.
pub const LEGACY_MENUS_FILE_NAME: &str = "menus.json";

/// Legacy plan file, read only as a fallback.
pub const LEGACY_PLAN_FILE_NAME: &str = "meal_plan.json";

/// Subdirectory (relative to the data directory) for exported spreadsheets.
pub const EXPORT_DIR_NAME: &str = "export";

/// File name prefix for exported spreadsheets.
pub const EXPORT_FILE_PREFIX: &str = "meal_plan";
