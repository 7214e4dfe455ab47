use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{entries_json, print_entry_list};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json, args.format.as_deref())?;
    let tracker = ctx.load_tracker()?;

    let mut entries = match args.project.as_deref() {
        Some(project) => tracker.get_entries_by_project(project),
        None => tracker.get_all_entries(),
    };
    if args.open {
        entries.retain(|entry| !entry.is_complete());
    }

    if ui.mode.is_json() {
        let output = serde_json::to_string_pretty(&entries_json(&entries)?)?;
        println!("{}", output);
    } else {
        print_entry_list(&ui, &entries, ctx.quiet());
    }
    Ok(())
}
