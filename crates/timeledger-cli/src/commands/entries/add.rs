//! Add entry command handler.

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::parse_datetime;
use crate::ui::{badge, Badge};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let start_time = parse_datetime(&args.start)?;
    let end_time = args.end.as_deref().map(parse_datetime).transpose()?;

    let mut tracker = ctx.load_tracker()?;
    let entry = tracker.add_entry(&args.project, &args.description, start_time, end_time);
    let id = entry.id.unwrap_or_default();
    let hours = entry.duration_hours();
    ctx.save_tracker(&tracker)?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None)?;
        let message = if end_time.is_some() {
            format!(
                "Apontamento #{} adicionado com sucesso! Duração: {:.2}h",
                id, hours
            )
        } else {
            format!("Apontamento #{} adicionado com sucesso!", id)
        };
        println!("{}", badge(&ui, Badge::Ok, &message));
    }
    Ok(())
}
