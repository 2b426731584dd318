//! Command line interface for the Xyston query engine.

pub mod args;
pub mod commands;
pub mod output;

pub use args::XystonArgs;
pub use commands::execute_command;
