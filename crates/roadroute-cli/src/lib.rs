//! roadroute CLI library.
//!
//! Argument parsing helpers, logging setup, and output formatting shared by
//! the `roadroute-cli` binary and its tests.

pub mod args;
pub mod logging;
pub mod output;
