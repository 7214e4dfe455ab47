//! Application context for the Timeledger CLI.
//!
//! Bundles the parsed CLI arguments with the lazily-loaded config file and
//! resolves which ledger file a command operates on.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use timeledger_core::TimeTracker;

use crate::cli::Cli;
use crate::config::{default_ledger_path, load_config, resolve_config_path, TimeledgerConfig};
use crate::ui::UiContext;

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<TimeledgerConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config file contents, loading them lazily.
    pub fn config(&self) -> anyhow::Result<&TimeledgerConfig> {
        self.config
            .get_or_try_init(|| load_config(&resolve_config_path()?))
    }

    /// Ledger file: `--file`, then `[ledger].path`, then the XDG data default.
    pub fn ledger_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = self.cli.file.as_ref() {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = self.config()?.ledger.path.as_ref() {
            return Ok(PathBuf::from(path));
        }
        default_ledger_path()
    }

    /// UI context for a command with the given output flags.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> anyhow::Result<UiContext> {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }

    /// Load the ledger; a missing file yields an empty ledger.
    pub fn load_tracker(&self) -> anyhow::Result<TimeTracker> {
        let path = self.ledger_path()?;
        tracing::info!(path = %path.display(), "loading ledger");
        Ok(TimeTracker::open(&path)?)
    }

    /// Save the ledger, creating the parent directory if needed.
    pub fn save_tracker(&self, tracker: &TimeTracker) -> anyhow::Result<PathBuf> {
        let path = self.ledger_path()?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    anyhow::anyhow!("Failed to create directory {}: {}", parent.display(), e)
                })?;
            }
        }
        tracker.save_to_file(&path)?;
        tracing::info!(path = %path.display(), entries = tracker.len(), "saved ledger");
        Ok(path)
    }
}
