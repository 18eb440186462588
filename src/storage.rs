//! Persistence for the planner state.
//!
//! All data lives in a single consolidated JSON file next to the executable.
//! Two legacy files (separate menu catalog and plan files) are consumed
//! read-only when the consolidated file is absent or unreadable. Loading
//! never fails: every read or decode error falls back to defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::constants::{
    DATA_FILE_NAME, EXPORT_DIR_NAME, LEGACY_MENUS_FILE_NAME, LEGACY_PLAN_FILE_NAME,
};
use crate::models::{MenuCatalog, MonthPlans, PlannerState};

/// Shape of the consolidated data file.
///
/// `menus` stays optional so that a structurally valid file without a
/// catalog is treated like the legacy format rather than an empty catalog.
#[derive(Debug, Deserialize)]
struct DataFile {
    menus: Option<MenuCatalog>,
    #[serde(default)]
    plans: BTreeMap<String, MonthPlans>,
    #[serde(default)]
    day_slots: BTreeMap<String, BTreeMap<String, crate::models::SlotConfig>>,
}

/// Shape of the legacy plan file: `{"plans": {...}}`.
#[derive(Debug, Deserialize)]
struct LegacyPlanFile {
    #[serde(default)]
    plans: BTreeMap<String, MonthPlans>,
}

/// File-system adapter for loading and saving the planner state.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Creates a storage adapter rooted at an explicit directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a storage adapter rooted next to the running executable.
    ///
    /// This keeps behavior identical whether the app is launched as a
    /// packaged binary or from a build directory. Falls back to the current
    /// directory if the executable path cannot be determined.
    #[must_use]
    pub fn beside_executable() -> Self {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self { dir }
    }

    /// The data directory this adapter reads and writes.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The export subdirectory for spreadsheets (not created here).
    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.dir.join(EXPORT_DIR_NAME)
    }

    fn data_file(&self) -> PathBuf {
        self.dir.join(DATA_FILE_NAME)
    }

    /// Loads the planner state.
    ///
    /// Tries the consolidated file first; on any read or decode failure
    /// falls back to the legacy files, and finally to built-in defaults.
    /// Never returns an error.
    #[must_use]
    pub fn load(&self) -> PlannerState {
        if let Some(state) = self.load_consolidated() {
            return state;
        }

        let menus = self.load_legacy_menus();
        let plans = self.load_legacy_plans();
        PlannerState {
            menus,
            plans,
            day_slots: BTreeMap::new(),
        }
    }

    fn load_consolidated(&self) -> Option<PlannerState> {
        let content = fs::read_to_string(self.data_file()).ok()?;
        let data: DataFile = serde_json::from_str(&content).ok()?;
        let mut menus = data.menus?;
        if !menus.is_complete() {
            menus.merge_defaults();
        }
        Some(PlannerState {
            menus,
            plans: data.plans,
            day_slots: data.day_slots,
        })
    }

    fn load_legacy_menus(&self) -> MenuCatalog {
        let path = self.dir.join(LEGACY_MENUS_FILE_NAME);
        let mut menus = fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str::<MenuCatalog>(&content).ok())
            .unwrap_or_else(MenuCatalog::with_defaults);
        menus.merge_defaults();
        menus
    }

    fn load_legacy_plans(&self) -> BTreeMap<String, MonthPlans> {
        let path = self.dir.join(LEGACY_PLAN_FILE_NAME);
        fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str::<LegacyPlanFile>(&content).ok())
            .map(|file| file.plans)
            .unwrap_or_default()
    }

    /// Saves the whole planner state to the consolidated file.
    ///
    /// Uses the temp file + rename pattern so a partially written file never
    /// replaces the previous state.
    pub fn save(&self, state: &PlannerState) -> Result<()> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create data directory: {}", self.dir.display())
        })?;

        let content =
            serde_json::to_string_pretty(state).context("Failed to serialize planner state")?;

        let data_path = self.data_file();
        let temp_path = data_path.with_extension("json.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp data file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, &data_path).with_context(|| {
            format!("Failed to rename temp data file to: {}", data_path.display())
        })?;

        Ok(())
    }
}
