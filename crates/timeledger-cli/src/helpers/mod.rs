//! Input and parsing helper functions for the CLI.
//!
//! - Interactive prompts for the menu (`input`)
//! - Timestamp and entry id parsing (`parsing`)

mod input;
mod parsing;

pub use input::{prompt_confirm, prompt_datetime, prompt_line};
pub use parsing::{parse_datetime, parse_entry_id, DATETIME_INPUT_FORMAT};
