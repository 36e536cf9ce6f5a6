//! CLI command handlers, one file per subcommand.

mod check;
mod probe;

pub use check::run_check;
pub use probe::run_probe;
