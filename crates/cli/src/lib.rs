//! kanbancal_cli - terminal front end for the kanbancal core.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use config::Config;
pub use error::{CliError, Result};
