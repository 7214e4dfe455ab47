//! Timeledger CLI - track time spent on projects and report on it
//!
//! This is the command-line interface for Timeledger. It wires the core
//! ledger to subcommands, an interactive menu, and a demo.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::errors::CliError;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            cli_err.exit();
        }
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli);

    let configured_level = ctx
        .config()
        .ok()
        .and_then(|config| config.logging.level.as_deref());
    logging::enable_logging(logging::resolve_level(cli.verbose, configured_level))?;

    match &cli.command {
        Some(Commands::Init(args)) => commands::handle_init(&ctx, args),
        Some(Commands::Add(args)) => commands::handle_add(&ctx, args),
        Some(Commands::Complete(args)) => commands::handle_complete(&ctx, args),
        Some(Commands::List(args)) => commands::handle_list(&ctx, args),
        Some(Commands::Show(args)) => commands::handle_show(&ctx, args),
        Some(Commands::Report(args)) => commands::handle_report(&ctx, args),
        Some(Commands::Menu) => commands::handle_menu(&ctx),
        Some(Commands::Demo(args)) => commands::handle_demo(&ctx, args),
        Some(Commands::Completions { shell }) => commands::handle_completions(*shell),
        None => {
            println!("Timeledger v{}", timeledger_core::VERSION);
            println!("Run `timeledger --help` for usage information.");
            Ok(())
        }
    }
}
