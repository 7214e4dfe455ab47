use timeledger_core::TimeAnalyzer;

use crate::app::AppContext;
use crate::cli::ReportArgs;
use crate::output::report_json;

pub fn handle_report(ctx: &AppContext, args: &ReportArgs) -> anyhow::Result<()> {
    let tracker = ctx.load_tracker()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report_json(&tracker)?)?);
    } else {
        println!("{}", TimeAnalyzer::generate_report(&tracker));
    }
    Ok(())
}
