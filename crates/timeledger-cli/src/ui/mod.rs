//! UI primitives for the Timeledger CLI.
//!
//! - **Context**: Environment detection (TTY, color, unicode) and output mode
//! - **Theme**: Badge tokens and styles
//! - **Render**: Badges, dividers, and tables

pub mod context;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use render::{badge, divider, table, Column};
pub use theme::Badge;
