//! Native front ends for the challenge board: a scripting CLI and, behind
//! the `tui` feature, an interactive terminal UI.

pub mod application;
pub mod infrastructure;

pub use application::{replay, ReplayReport};
pub use infrastructure::{CliError, LogConfig, Result};

#[cfg(feature = "tui")]
pub mod presentation;
