//! # vdbctl
//!
//! Resolves developer commands for the pyopenvdb packaging repository into
//! shell text: compose lifecycle, shells inside the build container, wheel
//! building and repair, tox, coverage and upload.
//!
//! ```bash
//! eval "$(vdbctl start)"
//! eval "$(vdbctl bash -a '-c ls')"
//! ```

#[macro_use]
extern crate log;

pub mod cli;
pub mod commands;
pub mod config;
pub mod info;
pub mod utils;

pub use cli::Cli;
pub use commands::{Subcommand, resolve};
pub use config::Settings;
pub use info::{Info, Repo};
pub use utils::{TaskError, TaskResult};
