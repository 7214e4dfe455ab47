//! # Timeledger Core
//!
//! Core library for Timeledger - a small, file-backed time-tracking ledger.
//!
//! This crate provides the domain model, persistence and reporting logic
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **entry**: A single tracked span of work and its duration rules
//! - **ledger**: The ordered, id-assigning collection of entries and its JSON file
//! - **report**: Read-only text report and per-project breakdown
//! - **timestamp**: ISO-8601 encoding of naive local timestamps

pub mod entry;
pub mod error;
pub mod fs;
pub mod ledger;
pub mod report;
pub mod timestamp;

pub use entry::{EntryStatus, TimeEntry};
pub use error::{Result, TrackerError};
pub use ledger::TimeTracker;
pub use report::{ProjectSummary, TimeAnalyzer};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
