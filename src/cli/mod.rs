//! CLI command handlers for logoswap.
//!
//! This module holds the argument definitions and the command that ties
//! config loading, logo rotation and module coloring together.

pub mod common;
pub mod swap;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use swap::{swap_document, SwapArgs, SwapSummary};
