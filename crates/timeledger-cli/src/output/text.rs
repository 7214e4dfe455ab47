//! Text and table output formatting for entries.

use timeledger_core::timestamp::to_display;
use timeledger_core::TimeEntry;

use crate::ui::{badge, table, Badge, Column, UiContext};

const LIST_COLUMNS: [Column; 7] = [
    Column::new("ID"),
    Column::new("STATUS"),
    Column::new("PROJETO"),
    Column::new("DESCRIÇÃO"),
    Column::new("INÍCIO"),
    Column::new("FIM"),
    Column::new("DURAÇÃO"),
];

fn display_id(entry: &TimeEntry) -> String {
    entry
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn status_badge(ctx: &UiContext, entry: &TimeEntry) -> String {
    let kind = if entry.is_complete() {
        Badge::Ok
    } else {
        Badge::Pending
    };
    badge(ctx, kind, entry.status().label())
}

/// The listing block for one entry.
pub fn entry_block(ctx: &UiContext, entry: &TimeEntry) -> Vec<String> {
    let mut lines = vec![
        format!("ID: {} | {}", display_id(entry), status_badge(ctx, entry)),
        format!("  Projeto: {}", entry.project),
        format!("  Descrição: {}", entry.description),
        format!("  Início: {}", to_display(&entry.start_time)),
    ];
    if let Some(end_time) = entry.end_time {
        lines.push(format!("  Fim: {}", to_display(&end_time)));
        lines.push(format!("  Duração: {:.2}h", entry.duration_hours()));
    }
    lines
}

/// Print a list of entries, as a table in pretty mode.
pub fn print_entry_list(ctx: &UiContext, entries: &[TimeEntry], quiet: bool) {
    if entries.is_empty() {
        if !quiet {
            println!("Nenhum apontamento registrado.");
        }
        return;
    }

    if ctx.mode.is_pretty() {
        let rows: Vec<Vec<String>> = entries
            .iter()
            .map(|entry| {
                vec![
                    display_id(entry),
                    status_badge(ctx, entry),
                    entry.project.clone(),
                    entry.description.clone(),
                    to_display(&entry.start_time),
                    entry.end_time.as_ref().map(to_display).unwrap_or_default(),
                    format!("{:.2}h", entry.duration_hours()),
                ]
            })
            .collect();
        println!("{}", table(ctx, &LIST_COLUMNS, &rows));
        return;
    }

    for entry in entries {
        println!();
        for line in entry_block(ctx, entry) {
            println!("{}", line);
        }
    }
}

/// Print a single entry.
pub fn print_entry(ctx: &UiContext, entry: &TimeEntry) {
    for line in entry_block(ctx, entry) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::context::OutputMode;
    use chrono::NaiveDate;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }

    #[test]
    fn test_entry_block_completed() {
        let start = NaiveDate::from_ymd_opt(2025, 11, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let entry = TimeEntry::new("Projeto A", "Dev", start)
            .with_end_time(Some(start + chrono::Duration::minutes(150)))
            .with_id(5);

        let lines = entry_block(&plain_ctx(), &entry);
        assert_eq!(lines[0], "ID: 5 | [OK] Completo");
        assert_eq!(lines[4], "  Fim: 2025-11-01 11:30");
        assert_eq!(lines[5], "  Duração: 2.50h");
    }

    #[test]
    fn test_entry_block_open_has_no_end_lines() {
        let start = NaiveDate::from_ymd_opt(2025, 11, 2)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        let entry = TimeEntry::new("Projeto D", "Reunião", start).with_id(2);

        let lines = entry_block(&plain_ctx(), &entry);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "ID: 2 | [..] Em andamento");
    }
}
