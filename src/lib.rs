//! Mealboard core library.
//!
//! A terminal application for planning meals across a calendar month:
//! per-day menu selections by category, JSON persistence with legacy-file
//! fallback, and XLSX export of a month's plan.

// Module declarations
pub mod calendar;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod storage;
pub mod tui;
