use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::CliError;
use crate::helpers::parse_entry_id;
use crate::output::{entry_json, print_entry};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let id = parse_entry_id(&args.id)?;
    let ui = ctx.ui_context(args.json, None)?;
    let tracker = ctx.load_tracker()?;

    let entry = tracker.get_entry(id).ok_or_else(|| {
        CliError::not_found(
            format!("Apontamento #{} não encontrado!", id),
            "Hint: Run `timeledger list` to find entry IDs.",
        )
    })?;

    if ui.mode.is_json() {
        let output = serde_json::to_string_pretty(&entry_json(entry)?)?;
        println!("{}", output);
    } else {
        print_entry(&ui, entry);
    }
    Ok(())
}
