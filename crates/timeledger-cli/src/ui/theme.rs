//! Badge tokens and their styles.

use owo_colors::{OwoColorize, Style};

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Err,
    Pending,
}

impl Badge {
    /// Get badge symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "\u{2713}",      // ✓
            (Self::Err, true) => "\u{2717}",     // ✗
            (Self::Pending, true) => "\u{23F3}", // ⏳
            (Self::Ok, false) => "[OK]",
            (Self::Err, false) => "[ERR]",
            (Self::Pending, false) => "[..]",
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => Style::new().green(),
            Self::Err => Style::new().red(),
            Self::Pending => Style::new().cyan(),
        }
    }
}

/// Apply `style` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_display_ascii() {
        assert_eq!(Badge::Ok.display(false), "[OK]");
        assert_eq!(Badge::Err.display(false), "[ERR]");
    }

    #[test]
    fn test_badge_display_unicode() {
        assert_eq!(Badge::Ok.display(true), "\u{2713}");
        assert_eq!(Badge::Pending.display(true), "\u{23F3}");
    }

    #[test]
    fn test_styled_without_color_is_plain() {
        assert_eq!(styled("Projeto", Badge::Ok.style(), false), "Projeto");
    }
}
