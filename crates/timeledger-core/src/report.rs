//! Text report over a ledger's current contents.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::ledger::TimeTracker;
use crate::timestamp::to_display;

const RULE_WIDTH: usize = 60;

/// Hours logged against one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub project: String,
    pub hours: f64,
    /// Share of the ledger's total hours, 0 when the total is 0
    pub percentage: f64,
    pub entries: usize,
}

/// Stateless report generator.
pub struct TimeAnalyzer;

impl TimeAnalyzer {
    /// Per-project totals sorted by project name.
    pub fn project_breakdown(tracker: &TimeTracker) -> Vec<ProjectSummary> {
        let total_hours = tracker.total_hours();
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for entry in tracker.entries() {
            *counts.entry(entry.project.as_str()).or_insert(0) += 1;
        }

        let hours_by_project: BTreeMap<String, f64> =
            tracker.total_hours_by_project().into_iter().collect();
        hours_by_project
            .into_iter()
            .map(|(project, hours)| {
                let entries = counts.get(project.as_str()).copied().unwrap_or(0);
                ProjectSummary {
                    percentage: percentage(hours, total_hours),
                    project,
                    hours,
                    entries,
                }
            })
            .collect()
    }

    pub fn generate_report(tracker: &TimeTracker) -> String {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        let mut report = vec![
            heavy.clone(),
            "RELATÓRIO DE ANÁLISE DE APONTAMENTOS".to_string(),
            heavy.clone(),
            String::new(),
        ];

        report.push(format!("Total de Horas: {:.2}h", tracker.total_hours()));
        report.push(format!("Total de Apontamentos: {}", tracker.len()));
        report.push(String::new());

        report.push("Horas por Projeto:".to_string());
        report.push(light.clone());
        for summary in Self::project_breakdown(tracker) {
            report.push(format!(
                "  {}: {:.2}h ({:.1}%)",
                summary.project, summary.hours, summary.percentage
            ));
        }

        report.push(String::new());
        report.push("Detalhes dos Apontamentos:".to_string());
        report.push(light);
        for entry in tracker.entries() {
            let id = entry
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            report.push(format!("  ID: {} | Projeto: {}", id, entry.project));
            report.push(format!("    Descrição: {}", entry.description));
            report.push(format!("    Início: {}", to_display(&entry.start_time)));
            if let Some(end_time) = entry.end_time {
                report.push(format!("    Fim: {}", to_display(&end_time)));
            }
            report.push(format!(
                "    Duração: {:.2}h | Status: {}",
                entry.duration_hours(),
                entry.status()
            ));
            report.push(String::new());
        }

        report.push(heavy);
        report.join("\n")
    }
}

fn percentage(hours: f64, total_hours: f64) -> f64 {
    if total_hours > 0.0 {
        hours / total_hours * 100.0
    } else {
        0.0
    }
}
