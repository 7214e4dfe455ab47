//! Output formatting helpers for the CLI.
//!
//! Entries are shown as JSON, as a table, or in the plain listing format.

mod json;
mod text;

// Re-export public API
pub use json::{entries_json, entry_json, report_json};
pub use text::{print_entry, print_entry_list};
