//! The time-tracking ledger.
//!
//! `TimeTracker` owns every entry it creates, assigns ids from a counter
//! that is persisted with the entries, and reads/writes the whole ledger as
//! one JSON document.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entry::TimeEntry;
use crate::error::{Result, TrackerError};
use crate::fs::write_replacing;

/// Ordered, append-only collection of entries plus the next-id counter.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeTracker {
    entries: Vec<TimeEntry>,
    next_id: u64,
}

/// On-disk layout of a ledger file.
#[derive(Debug, Serialize, Deserialize)]
struct LedgerDocument {
    #[serde(default = "first_id")]
    next_id: u64,
    #[serde(default)]
    entries: Vec<TimeEntry>,
}

fn first_id() -> u64 {
    1
}

impl Default for TimeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeTracker {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: first_id(),
        }
    }

    /// Create a ledger and load it from `path` if the file exists.
    pub fn open(path: &Path) -> Result<Self> {
        let mut tracker = Self::new();
        tracker.load_from_file(path)?;
        Ok(tracker)
    }

    /// The id the next added entry will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrowed view of all entries in storage order.
    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    /// Append a new entry with the next id.
    pub fn add_entry(
        &mut self,
        project: impl Into<String>,
        description: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: Option<NaiveDateTime>,
    ) -> &TimeEntry {
        let id = self.next_id;
        let entry = TimeEntry::new(project, description, start_time)
            .with_end_time(end_time)
            .with_id(id);
        tracing::debug!(id, project = %entry.project, "added entry");
        self.entries.push(entry);
        self.next_id += 1;
        &self.entries[self.entries.len() - 1]
    }

    pub fn get_entry(&self, id: u64) -> Option<&TimeEntry> {
        self.entries.iter().find(|entry| entry.id == Some(id))
    }

    pub fn get_entry_mut(&mut self, id: u64) -> Option<&mut TimeEntry> {
        self.entries.iter_mut().find(|entry| entry.id == Some(id))
    }

    /// Complete an open entry.
    ///
    /// # Errors
    ///
    /// - `TrackerError::NotFound` if no entry has this id
    /// - `TrackerError::AlreadyCompleted` if the entry already has an end time
    pub fn complete_entry(&mut self, id: u64, end_time: NaiveDateTime) -> Result<&TimeEntry> {
        let entry = self.get_entry_mut(id).ok_or(TrackerError::NotFound(id))?;
        if entry.is_complete() {
            return Err(TrackerError::AlreadyCompleted(id));
        }
        entry.complete(end_time);
        tracing::debug!(id, hours = entry.duration_hours(), "completed entry");
        Ok(entry)
    }

    /// Snapshot copy of all entries; changes to it do not touch the ledger.
    pub fn get_all_entries(&self) -> Vec<TimeEntry> {
        self.entries.clone()
    }

    /// Entries whose project matches exactly (case-sensitive).
    pub fn get_entries_by_project(&self, project: &str) -> Vec<TimeEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.project == project)
            .cloned()
            .collect()
    }

    /// Entries that have not been completed yet.
    pub fn open_entries(&self) -> Vec<TimeEntry> {
        self.entries
            .iter()
            .filter(|entry| !entry.is_complete())
            .cloned()
            .collect()
    }

    pub fn total_hours(&self) -> f64 {
        self.entries
            .iter()
            .map(TimeEntry::duration_hours)
            .fold(0.0, |total, hours| total + hours)
    }

    pub fn total_hours_by_project(&self) -> HashMap<String, f64> {
        let mut result = HashMap::new();
        for entry in &self.entries {
            *result.entry(entry.project.clone()).or_insert(0.0) += entry.duration_hours();
        }
        result
    }

    /// Write the ledger to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Storage` if the file cannot be written.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let document = LedgerDocument {
            next_id: self.next_id,
            entries: self.entries.clone(),
        };
        let json = serde_json::to_string_pretty(&document)?;
        write_replacing(path, json.as_bytes()).map_err(|err| {
            TrackerError::Storage(format!("Failed to write {}: {}", path.display(), err))
        })?;
        tracing::debug!(path = %path.display(), entries = self.entries.len(), "saved ledger");
        Ok(())
    }

    /// Replace the ledger contents with the document at `path`.
    ///
    /// A missing file leaves the ledger as it is.
    ///
    /// # Errors
    ///
    /// - `TrackerError::Storage` if the file exists but cannot be read
    /// - `TrackerError::Validation` if the document is not a valid ledger;
    ///   the ledger is left unchanged; this includes a `next_id` of 0 or one
    ///   with no successor
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no ledger file, nothing to load");
                return Ok(());
            }
            Err(err) => {
                return Err(TrackerError::Storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    err
                )))
            }
        };

        let document: LedgerDocument = serde_json::from_str(&contents).map_err(|err| {
            TrackerError::Validation(format!("Failed to parse {}: {}", path.display(), err))
        })?;
        if document.next_id == 0 || document.next_id == u64::MAX {
            return Err(TrackerError::Validation(format!(
                "Invalid next_id {} in {}",
                document.next_id,
                path.display()
            )));
        }
        self.next_id = document.next_id;
        self.entries = document.entries;
        tracing::debug!(
            path = %path.display(),
            entries = self.entries.len(),
            next_id = self.next_id,
            "loaded ledger"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn nov(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_add_entry_assigns_sequential_ids() {
        let mut tracker = TimeTracker::new();
        let first = tracker.add_entry("Projeto A", "Dev", nov(1, 9, 0), None).id;
        let second = tracker.add_entry("Projeto B", "Review", nov(1, 9, 0), None).id;

        assert_eq!(first, Some(1));
        assert_eq!(second, Some(2));
        assert_eq!(tracker.next_id(), 3);
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn test_get_entry() {
        let mut tracker = TimeTracker::new();
        tracker.add_entry("Projeto A", "Dev", nov(1, 9, 0), None);

        let entry = tracker.get_entry(1).unwrap();
        assert_eq!(entry.project, "Projeto A");
        assert!(tracker.get_entry(999).is_none());
        assert!(tracker.get_entry(0).is_none());
    }

    #[test]
    fn test_get_all_entries_is_a_copy() {
        let mut tracker = TimeTracker::new();
        tracker.add_entry("Projeto A", "Dev", nov(1, 9, 0), None);

        let mut snapshot = tracker.get_all_entries();
        snapshot.clear();

        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_get_entries_by_project_is_exact() {
        let mut tracker = TimeTracker::new();
        tracker.add_entry("Projeto A", "Dev", nov(1, 9, 0), None);
        tracker.add_entry("Projeto B", "Review", nov(1, 9, 0), None);
        tracker.add_entry("Projeto A", "Tests", nov(2, 9, 0), None);
        tracker.add_entry("projeto a", "Lowercase", nov(2, 9, 0), None);

        let entries = tracker.get_entries_by_project("Projeto A");
        let ids: Vec<_> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![Some(1), Some(3)]);
    }

    #[test]
    fn test_total_hours() {
        let mut tracker = TimeTracker::new();
        tracker.add_entry("Projeto A", "Dev", nov(1, 9, 0), Some(nov(1, 17, 0)));
        tracker.add_entry("Projeto B", "Review", nov(1, 9, 0), Some(nov(1, 11, 0)));
        tracker.add_entry("Projeto B", "Open", nov(1, 12, 0), None);
        tracker.add_entry("Projeto C", "Inverted", nov(1, 12, 0), Some(nov(1, 10, 0)));

        assert_eq!(tracker.total_hours(), 10.0);
    }

    #[test]
    fn test_total_hours_empty_ledger_is_positive_zero() {
        let total = TimeTracker::new().total_hours();
        assert_eq!(total, 0.0);
        assert!(total.is_sign_positive());
        assert_eq!(format!("{:.2}", total), "0.00");
    }

    #[test]
    fn test_total_hours_by_project_partitions_total() {
        let mut tracker = TimeTracker::new();
        tracker.add_entry("Projeto A", "Dev", nov(1, 9, 0), Some(nov(1, 17, 0)));
        tracker.add_entry("Projeto B", "Review", nov(1, 9, 0), Some(nov(1, 11, 0)));
        tracker.add_entry("Projeto A", "Tests", nov(2, 9, 0), Some(nov(2, 12, 0)));
        tracker.add_entry("Projeto C", "Docs", nov(2, 9, 0), Some(nov(2, 10, 30)));

        let by_project = tracker.total_hours_by_project();
        assert_eq!(by_project["Projeto A"], 11.0);
        assert_eq!(by_project["Projeto B"], 2.0);
        assert_eq!(by_project["Projeto C"], 1.5);

        let sum: f64 = by_project.values().sum();
        assert!((sum - tracker.total_hours()).abs() < 1e-9);
    }

    #[test]
    fn test_complete_entry_guards() {
        let mut tracker = TimeTracker::new();
        tracker.add_entry("Projeto A", "Dev", nov(1, 9, 0), None);

        let hours = tracker
            .complete_entry(1, nov(1, 13, 0))
            .unwrap()
            .duration_hours();
        assert_eq!(hours, 4.0);

        assert!(matches!(
            tracker.complete_entry(1, nov(1, 15, 0)),
            Err(TrackerError::AlreadyCompleted(1))
        ));
        assert!(matches!(
            tracker.complete_entry(42, nov(1, 15, 0)),
            Err(TrackerError::NotFound(42))
        ));
        assert_eq!(tracker.get_entry(1).unwrap().end_time, Some(nov(1, 13, 0)));
    }

    #[test]
    fn test_open_entries() {
        let mut tracker = TimeTracker::new();
        tracker.add_entry("Projeto A", "Dev", nov(1, 9, 0), Some(nov(1, 17, 0)));
        tracker.add_entry("Projeto B", "Open", nov(1, 9, 0), None);

        let open = tracker.open_entries();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].id, Some(2));
    }
}
