//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod check;
mod compare;
mod completions;

pub use check::handle_check;
pub use compare::handle_compare;
pub use completions::handle_completions;
