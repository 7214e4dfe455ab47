use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use timeledger_core::VERSION;

/// Timeledger - track time spent on projects and report on it
#[derive(Parser)]
#[command(name = "timeledger")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the ledger file (JSON)
    #[arg(short, long, global = true, env = "TIMELEDGER_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols instead of unicode
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Ledger file the config will point at
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Project name
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// What was worked on
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Start time (YYYY-MM-DD HH:MM or ISO-8601)
    #[arg(long)]
    pub start: String,

    /// End time; omit to leave the entry open
    #[arg(long)]
    pub end: Option<String>,
}

/// Arguments for the `complete` command
#[derive(Args)]
pub struct CompleteArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// End time (YYYY-MM-DD HH:MM or ISO-8601)
    #[arg(long)]
    pub end: String,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Only entries for this project (exact match)
    #[arg(long)]
    pub project: Option<String>,

    /// Only entries that are still in progress
    #[arg(long)]
    pub open: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `report` command
#[derive(Args)]
pub struct ReportArgs {
    /// Output totals and per-project breakdown as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `demo` command
#[derive(Args)]
pub struct DemoArgs {
    /// Save the demo ledger to this path
    #[arg(long, value_name = "PATH")]
    pub save: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file pointing at a ledger file
    Init(InitArgs),

    /// Add a new time entry
    Add(AddArgs),

    /// Complete an open time entry
    Complete(CompleteArgs),

    /// List time entries
    List(ListArgs),

    /// Show a specific entry by ID
    Show(ShowArgs),

    /// Print the analysis report
    Report(ReportArgs),

    /// Interactive menu
    Menu,

    /// Seed a sample ledger and print its report
    Demo(DemoArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
