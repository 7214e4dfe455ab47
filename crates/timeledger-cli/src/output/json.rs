//! JSON output formatting for entries and reports.

use timeledger_core::{TimeAnalyzer, TimeEntry, TimeTracker};

/// Convert an entry to JSON for output, with its computed duration.
pub fn entry_json(entry: &TimeEntry) -> anyhow::Result<serde_json::Value> {
    let mut value = entry.to_json()?;
    if let Some(object) = value.as_object_mut() {
        object.insert(
            "duration_hours".to_string(),
            serde_json::json!(entry.duration_hours()),
        );
        object.insert(
            "status".to_string(),
            serde_json::json!(entry.status().label()),
        );
    }
    Ok(value)
}

/// Convert multiple entries to a JSON array for output.
pub fn entries_json(entries: &[TimeEntry]) -> anyhow::Result<Vec<serde_json::Value>> {
    entries.iter().map(entry_json).collect()
}

/// Totals and per-project breakdown.
pub fn report_json(tracker: &TimeTracker) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::json!({
        "total_hours": tracker.total_hours(),
        "total_entries": tracker.len(),
        "open_entries": tracker.open_entries().len(),
        "projects": TimeAnalyzer::project_breakdown(tracker),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_entry_json_adds_duration_and_status() {
        let start = NaiveDate::from_ymd_opt(2025, 11, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let entry = TimeEntry::new("Projeto A", "Dev", start)
            .with_end_time(Some(start + chrono::Duration::hours(2)))
            .with_id(1);

        let value = entry_json(&entry).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["duration_hours"], 2.0);
        assert_eq!(value["status"], "Completo");
    }

    #[test]
    fn test_report_json_empty_ledger() {
        let value = report_json(&TimeTracker::new()).unwrap();
        assert_eq!(value["total_hours"], 0.0);
        assert!(!value.to_string().contains("-0.0"));
        assert_eq!(value["total_entries"], 0);
        assert!(value["projects"].as_array().unwrap().is_empty());
    }
}
