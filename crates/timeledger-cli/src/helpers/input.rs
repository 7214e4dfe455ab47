//! Interactive prompts used by the menu.

use chrono::NaiveDateTime;
use dialoguer::Input;

use super::parsing::{parse_datetime, parse_yes_no, DATETIME_INPUT_FORMAT};

/// Ask for a line of text. Empty input is allowed.
pub fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Ask for a timestamp, re-prompting until it parses.
pub fn prompt_datetime(prompt: &str) -> anyhow::Result<NaiveDateTime> {
    let value: String = Input::new()
        .with_prompt(format!("{} (formato: {})", prompt, DATETIME_INPUT_FORMAT))
        .validate_with(|input: &String| -> Result<(), String> {
            parse_datetime(input)
                .map(|_| ())
                .map_err(|_| format!("Formato inválido. Use: {}", DATETIME_INPUT_FORMAT))
        })
        .interact_text()?;
    Ok(parse_datetime(&value)?)
}

/// Ask a yes/no question answered with `s` or `n`. Empty means no.
pub fn prompt_confirm(prompt: &str) -> anyhow::Result<bool> {
    let value: String = Input::new()
        .with_prompt(format!("{} (s/n)", prompt))
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            parse_yes_no(input)
                .map(|_| ())
                .ok_or_else(|| "Responda s ou n".to_string())
        })
        .interact_text()?;
    Ok(parse_yes_no(&value).unwrap_or(false))
}
