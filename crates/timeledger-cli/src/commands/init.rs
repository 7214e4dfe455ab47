//! Init command: write a config file pointing at a ledger file.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::cli::InitArgs;
use crate::config::{default_ledger_path, resolve_config_path, write_config, TimeledgerConfig};
use crate::errors::CliError;
use crate::ui::{badge, Badge};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Re-run with --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    let ledger_path = match args.path.as_ref().or(ctx.cli().file.as_ref()) {
        Some(path) => PathBuf::from(path),
        None => default_ledger_path()?,
    };

    write_config(&config_path, &TimeledgerConfig::new(ledger_path.clone()))?;
    tracing::info!(config = %config_path.display(), "wrote config");

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None)?;
        println!(
            "{}",
            badge(
                &ui,
                Badge::Ok,
                &format!("Config written to {}", config_path.display())
            )
        );
        println!("Ledger file: {}", ledger_path.display());
    }
    Ok(())
}
