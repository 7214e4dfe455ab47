//! Command handlers, one module per subcommand group.

pub mod demo;
pub mod entries;
pub mod init;
pub mod menu;
pub mod misc;
pub mod report;

pub use demo::handle_demo;
pub use entries::{handle_add, handle_complete, handle_list, handle_show};
pub use init::handle_init;
pub use menu::handle_menu;
pub use misc::handle_completions;
pub use report::handle_report;
