//! Entry command handlers.

mod add;
mod complete;
mod list;
mod show;

pub use add::handle_add;
pub use complete::handle_complete;
pub use list::handle_list;
pub use show::handle_show;
