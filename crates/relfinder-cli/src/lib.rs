//! relfinder CLI library.
//!
//! This library provides the pieces behind the `relfinder` binary: argument
//! parsing, settings, logging setup, identifier file loading and the two
//! command implementations.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod input;
pub mod logging;

pub use cli::{Cli, Command};
pub use config::Settings;
pub use context::RunContext;
pub use error::{CliError, Result};
