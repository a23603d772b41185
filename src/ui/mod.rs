//! User interface and interaction
//!
//! This module contains CLI parsing, progress reporting and shell
//! completion generation.

pub mod cli;
pub mod completion;
pub mod progress;

// Re-export commonly used items
pub use cli::{Cli, Commands, cli_to_config};
pub use completion::print_completions;
pub use progress::ProgressReporter;
