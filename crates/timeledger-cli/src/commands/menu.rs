//! Interactive menu over a loaded ledger.
//!
//! Bad input inside an action is reported and the menu continues; only
//! prompt I/O failures or save errors end the loop.

use timeledger_core::{TimeAnalyzer, TimeTracker};

use crate::app::AppContext;
use crate::errors::CliError;
use crate::helpers::{parse_entry_id, prompt_confirm, prompt_datetime, prompt_line};
use crate::output::print_entry_list;
use crate::ui::{badge, divider, Badge, UiContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Complete,
    List,
    Report,
    Save,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Complete),
            "3" => Some(Self::List),
            "4" => Some(Self::Report),
            "5" => Some(Self::Save),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

fn print_menu() {
    println!();
    println!("{}", divider('='));
    println!("APLICAÇÃO DE ANÁLISE DE APONTAMENTO");
    println!("{}", divider('='));
    println!("1. Adicionar novo apontamento");
    println!("2. Completar apontamento");
    println!("3. Listar apontamentos");
    println!("4. Gerar relatório de análise");
    println!("5. Salvar dados");
    println!("6. Sair");
    println!("{}", divider('='));
}

fn add_entry(ui: &UiContext, tracker: &mut TimeTracker) -> anyhow::Result<()> {
    println!("\n--- Adicionar Novo Apontamento ---");
    let project = prompt_line("Nome do projeto")?;
    let description = prompt_line("Descrição")?;
    let start_time = prompt_datetime("Data/hora de início")?;

    let end_time = if prompt_confirm("Apontamento já está completo?")? {
        Some(prompt_datetime("Data/hora de término")?)
    } else {
        None
    };

    let id = tracker
        .add_entry(project, description, start_time, end_time)
        .id
        .unwrap_or_default();
    println!(
        "{}",
        badge(
            ui,
            Badge::Ok,
            &format!("Apontamento #{} adicionado com sucesso!", id)
        )
    );
    Ok(())
}

fn complete_entry(ui: &UiContext, tracker: &mut TimeTracker) -> anyhow::Result<()> {
    println!("\n--- Completar Apontamento ---");
    let raw_id = prompt_line("ID do apontamento")?;
    let id = match parse_entry_id(&raw_id) {
        Ok(id) => id,
        Err(_) => {
            println!("{}", badge(ui, Badge::Err, "ID inválido!"));
            return Ok(());
        }
    };

    match tracker.get_entry(id) {
        None => {
            let message = CliError::from(timeledger_core::TrackerError::NotFound(id));
            println!("{}", badge(ui, Badge::Err, first_line(&message.to_string())));
            return Ok(());
        }
        Some(entry) if entry.is_complete() => {
            let message = CliError::from(timeledger_core::TrackerError::AlreadyCompleted(id));
            println!("{}", badge(ui, Badge::Err, &message.to_string()));
            return Ok(());
        }
        Some(_) => {}
    }

    let end_time = prompt_datetime("Data/hora de término")?;
    let hours = tracker.complete_entry(id, end_time)?.duration_hours();
    println!(
        "{}",
        badge(
            ui,
            Badge::Ok,
            &format!("Apontamento #{} completado! Duração: {:.2}h", id, hours)
        )
    );
    Ok(())
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or(message)
}

pub fn handle_menu(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, Some("plain"))?;
    if !ui.is_interactive() {
        return Err(CliError::invalid_input(
            "The menu needs an interactive terminal.\nHint: Use `timeledger add`, `complete`, `list` or `report` instead.",
        )
        .into());
    }

    let path = ctx.ledger_path()?;
    let mut tracker = ctx.load_tracker()?;
    println!(
        "{}",
        badge(
            &ui,
            Badge::Ok,
            &format!("Dados carregados de {}", path.display())
        )
    );

    loop {
        print_menu();
        let choice = prompt_line("Escolha uma opção")?;
        match MenuChoice::parse(&choice) {
            Some(MenuChoice::Add) => add_entry(&ui, &mut tracker)?,
            Some(MenuChoice::Complete) => complete_entry(&ui, &mut tracker)?,
            Some(MenuChoice::List) => {
                println!("\n--- Lista de Apontamentos ---");
                print_entry_list(&ui, tracker.entries(), false);
            }
            Some(MenuChoice::Report) => {
                println!("\n");
                println!("{}", TimeAnalyzer::generate_report(&tracker));
            }
            Some(MenuChoice::Save) => {
                let saved = ctx.save_tracker(&tracker)?;
                println!(
                    "{}",
                    badge(
                        &ui,
                        Badge::Ok,
                        &format!("Dados salvos em {}", saved.display())
                    )
                );
            }
            Some(MenuChoice::Exit) => {
                ctx.save_tracker(&tracker)?;
                println!("\n{}", badge(&ui, Badge::Ok, "Dados salvos. Até logo!"));
                return Ok(());
            }
            None => println!("{}", badge(&ui, Badge::Err, "Opção inválida!")),
        }
    }
}
