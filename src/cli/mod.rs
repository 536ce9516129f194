//! Command-line surface: the script driver and the binary's subcommands.

pub mod commands;
pub mod script;

pub use script::{run_script, ScriptDriver};
