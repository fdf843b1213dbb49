//! CLI command handlers, one file per command.

mod decode;
mod exts;
mod ls;
mod shell;

pub use decode::run_decode;
pub use exts::run_exts;
pub use ls::{run_ls, LsArgs};
pub use shell::run_shell;
