//! A single tracked span of work.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::timestamp;

/// One recorded (or in-progress) span of tracked work.
///
/// The serialized form is the persisted record:
/// `{id, project, description, start_time, end_time}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Identifier assigned by the ledger
    #[serde(default)]
    pub id: Option<u64>,

    /// Project name (free-form)
    pub project: String,

    /// What was worked on (may be empty)
    pub description: String,

    /// When work started
    #[serde(with = "timestamp::iso")]
    pub start_time: NaiveDateTime,

    /// When work ended; `None` while the entry is open
    #[serde(default, with = "timestamp::iso_option")]
    pub end_time: Option<NaiveDateTime>,
}

/// Completion state of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Complete,
    InProgress,
}

impl EntryStatus {
    /// Report label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Complete => "Completo",
            Self::InProgress => "Em andamento",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TimeEntry {
    pub fn new(
        project: impl Into<String>,
        description: impl Into<String>,
        start_time: NaiveDateTime,
    ) -> Self {
        Self {
            id: None,
            project: project.into(),
            description: description.into(),
            start_time,
            end_time: None,
        }
    }

    pub fn with_end_time(mut self, end_time: Option<NaiveDateTime>) -> Self {
        self.end_time = end_time;
        self
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the end time. Calling this on a completed entry overwrites it.
    pub fn complete(&mut self, end_time: NaiveDateTime) {
        self.end_time = Some(end_time);
    }

    pub fn is_complete(&self) -> bool {
        self.end_time.is_some()
    }

    pub fn status(&self) -> EntryStatus {
        if self.is_complete() {
            EntryStatus::Complete
        } else {
            EntryStatus::InProgress
        }
    }

    /// Duration in hours.
    ///
    /// Open entries report 0. An end time before the start time is kept as
    /// stored but also reports 0.
    pub fn duration_hours(&self) -> f64 {
        let Some(end_time) = self.end_time else {
            return 0.0;
        };
        let delta = end_time - self.start_time;
        let seconds = match delta.num_microseconds() {
            Some(micros) => micros as f64 / 1_000_000.0,
            None => delta.num_seconds() as f64,
        };
        (seconds / 3600.0).max(0.0)
    }

    /// Encode as a JSON record.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Decode from a JSON record.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}
