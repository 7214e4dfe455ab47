//! Demo command: seed a sample ledger and walk through its numbers.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use timeledger_core::{TimeAnalyzer, TimeTracker};

use crate::app::AppContext;
use crate::cli::DemoArgs;
use crate::ui::{badge, divider, Badge, UiContext};

fn base_date() -> anyhow::Result<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2025, 11, 1)
        .and_then(|date| date.and_hms_opt(9, 0, 0))
        .ok_or_else(|| anyhow::anyhow!("Invalid demo base date"))
}

/// The sample ledger: four completed entries and one still in progress.
pub fn demo_tracker() -> anyhow::Result<TimeTracker> {
    let base = base_date()?;
    let mut tracker = TimeTracker::new();
    tracker.add_entry(
        "Projeto A - Sistema Web",
        "Desenvolvimento de novas features",
        base,
        Some(base + Duration::hours(8)),
    );
    tracker.add_entry(
        "Projeto B - API REST",
        "Revisão de código e merge requests",
        base,
        Some(base + Duration::hours(2)),
    );
    tracker.add_entry(
        "Projeto A - Sistema Web",
        "Testes unitários e integração",
        base + Duration::days(1),
        Some(base + Duration::days(1) + Duration::hours(3)),
    );
    tracker.add_entry(
        "Projeto C - Mobile App",
        "Documentação técnica",
        base + Duration::days(1),
        Some(base + Duration::days(1) + Duration::minutes(90)),
    );
    tracker.add_entry(
        "Projeto B - API REST",
        "Implementação de novos endpoints",
        base + Duration::days(2),
        None,
    );
    Ok(tracker)
}

fn print_added(ui: &UiContext, tracker: &TimeTracker) {
    for entry in tracker.entries() {
        let short_project = entry
            .project
            .split(" - ")
            .next()
            .unwrap_or(entry.project.as_str());
        let detail = if entry.is_complete() {
            format!("{}h", entry.duration_hours())
        } else {
            entry.status().label().to_string()
        };
        let id = entry.id.unwrap_or_default();
        println!(
            "   {}",
            badge(
                ui,
                Badge::Ok,
                &format!("Apontamento #{}: {} - {}", id, short_project, detail)
            )
        );
    }
}

pub fn handle_demo(ctx: &AppContext, args: &DemoArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None)?;
    let tracker = demo_tracker()?;

    println!("{}", divider('='));
    println!("DEMONSTRAÇÃO - APLICAÇÃO DE ANÁLISE DE APONTAMENTO");
    println!("{}", divider('='));
    println!();

    println!("1. Adicionando apontamentos...");
    print_added(&ui, &tracker);
    println!();

    println!("2. Calculando estatísticas...");
    println!("   Total de horas: {:.2}h", tracker.total_hours());
    println!("   Horas por projeto:");
    let by_project: BTreeMap<String, f64> = tracker.total_hours_by_project().into_iter().collect();
    for (project, hours) in &by_project {
        println!("     - {}: {:.2}h", project, hours);
    }
    println!();

    println!("3. Gerando relatório completo...");
    println!();
    println!("{}", TimeAnalyzer::generate_report(&tracker));

    if let Some(path) = args.save.as_deref() {
        tracker.save_to_file(Path::new(path))?;
        println!();
        println!(
            "{}",
            badge(&ui, Badge::Ok, &format!("Dados salvos em {}", path))
        );
    }

    println!();
    println!("{}", divider('='));
    println!("Demonstração concluída com sucesso!");
    println!("{}", divider('='));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_tracker_totals() {
        let tracker = demo_tracker().unwrap();
        assert_eq!(tracker.len(), 5);
        assert_eq!(tracker.next_id(), 6);
        assert_eq!(tracker.total_hours(), 14.5);

        let by_project = tracker.total_hours_by_project();
        assert_eq!(by_project["Projeto A - Sistema Web"], 11.0);
        assert_eq!(by_project["Projeto B - API REST"], 2.0);
        assert_eq!(by_project["Projeto C - Mobile App"], 1.5);
    }

    #[test]
    fn test_demo_tracker_last_entry_is_open() {
        let tracker = demo_tracker().unwrap();
        let open = tracker.open_entries();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].id, Some(5));
    }
}
