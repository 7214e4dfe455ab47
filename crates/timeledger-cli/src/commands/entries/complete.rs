//! Complete entry command handler.

use crate::app::AppContext;
use crate::cli::CompleteArgs;
use crate::errors::CliError;
use crate::helpers::{parse_datetime, parse_entry_id};
use crate::ui::{badge, Badge};

pub fn handle_complete(ctx: &AppContext, args: &CompleteArgs) -> anyhow::Result<()> {
    let id = parse_entry_id(&args.id)?;
    let end_time = parse_datetime(&args.end)?;

    let mut tracker = ctx.load_tracker()?;
    let hours = tracker
        .complete_entry(id, end_time)
        .map_err(CliError::from)?
        .duration_hours();
    ctx.save_tracker(&tracker)?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None)?;
        let message = format!("Apontamento #{} completado! Duração: {:.2}h", id, hours);
        println!("{}", badge(&ui, Badge::Ok, &message));
    }
    Ok(())
}
