//! CLI subcommand implementations.

pub mod check;
pub mod replay;
