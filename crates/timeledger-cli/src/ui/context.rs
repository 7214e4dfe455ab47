//! UI context for environment detection and output routing.

use std::io::IsTerminal;

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain text, stable for logs and scripts
    #[default]
    Plain,
    /// Tables and colors (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// `--json` wins, then an explicit `--format`, then `TERM=dumb`
    /// (plain), then pretty only when stdout is a TTY.
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> anyhow::Result<Self> {
        if json_flag {
            if format_flag.is_some() {
                return Err(anyhow::anyhow!("--format cannot be used with --json"));
            }
            return Ok(Self::Json);
        }

        match format_flag {
            Some("plain") => return Ok(Self::Plain),
            Some("table") => return Ok(Self::Pretty),
            Some(other) => {
                return Err(anyhow::anyhow!(
                    "Invalid format: {} (use table or plain)",
                    other
                ))
            }
            None => {}
        }

        if is_tty && !term_is_dumb {
            Ok(Self::Pretty)
        } else {
            Ok(Self::Plain)
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    pub fn from_env(
        json_flag: bool,
        format_flag: Option<&str>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> anyhow::Result<Self> {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        let color = is_tty && !no_color_flag && !no_color_env && !term_is_dumb;
        let mode = OutputMode::resolve(json_flag, format_flag, is_tty, term_is_dumb)?;

        Ok(Self {
            color,
            unicode: !ascii_flag,
            mode,
        })
    }

    /// Check if interactive prompts are possible.
    pub fn is_interactive(&self) -> bool {
        std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_wins() {
        let mode = OutputMode::resolve(true, None, true, false).unwrap();
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn test_json_with_format_is_rejected() {
        assert!(OutputMode::resolve(true, Some("plain"), true, false).is_err());
    }

    #[test]
    fn test_plain_format_forces_plain() {
        let mode = OutputMode::resolve(false, Some("plain"), true, false).unwrap();
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_table_format_forces_pretty() {
        let mode = OutputMode::resolve(false, Some("table"), false, false).unwrap();
        assert_eq!(mode, OutputMode::Pretty);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(OutputMode::resolve(false, Some("csv"), false, false).is_err());
    }

    #[test]
    fn test_non_tty_gets_plain() {
        let mode = OutputMode::resolve(false, None, false, false).unwrap();
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_term_dumb_forces_plain() {
        let mode = OutputMode::resolve(false, None, true, true).unwrap();
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_ascii_disables_unicode() {
        let ctx = UiContext::from_env(false, None, false, true).unwrap();
        assert!(!ctx.unicode);
    }
}
