//! Export of a month's plan to an XLSX spreadsheet.

pub mod sheet;
pub mod xlsx;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::constants::EXPORT_FILE_PREFIX;
use crate::models::{MonthKey, PlannerState};

pub use sheet::{build_month_sheet, Sheet};
pub use xlsx::write_workbook;

/// Exports one month's plan as `meal_plan_<YYYY-MM>.xlsx` inside
/// `export_dir`, creating the directory if needed.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns an error if the export directory cannot be created or the
/// spreadsheet cannot be written.
pub fn export_month(state: &PlannerState, month: MonthKey, export_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(export_dir).with_context(|| {
        format!("Failed to create export directory: {}", export_dir.display())
    })?;

    let path = export_dir.join(format!("{EXPORT_FILE_PREFIX}_{month}.xlsx"));
    let sheet = build_month_sheet(state, month);
    write_workbook(&sheet, &path)?;
    Ok(path)
}
