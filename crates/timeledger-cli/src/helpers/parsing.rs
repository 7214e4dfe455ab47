//! Parsing helpers for timestamps and entry ids.

use chrono::NaiveDateTime;

use crate::errors::CliError;

/// The format shown to users when asking for a timestamp.
pub const DATETIME_INPUT_FORMAT: &str = "YYYY-MM-DD HH:MM";

/// Parse a timestamp given on the command line or at a prompt.
///
/// Accepts `YYYY-MM-DD HH:MM` plus anything the ledger file accepts
/// (ISO-8601 with `T`, seconds, RFC 3339).
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime, CliError> {
    timeledger_core::timestamp::parse(value).map_err(|_| {
        CliError::invalid_input(format!(
            "Formato inválido: {} (use {})",
            value.trim(),
            DATETIME_INPUT_FORMAT
        ))
    })
}

/// Parse a numeric entry id.
pub fn parse_entry_id(value: &str) -> Result<u64, CliError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| CliError::invalid_input(format!("ID inválido: {}", value.trim())))
}

/// Parse a yes/no answer. `s`/`sim` and `y`/`yes` mean yes; an empty
/// answer means no.
pub fn parse_yes_no(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "s" | "sim" | "y" | "yes" => Some(true),
        "" | "n" | "não" | "nao" | "no" => Some(false),
        _ => None,
    }
}
