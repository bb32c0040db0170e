// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of Cadence: load a rule from a TOML file and print its
//! occurrences.

mod arg;
mod cli;
mod cmd_check;
mod cmd_list;
mod config;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_check::CmdCheck;
pub use crate::cmd_list::CmdList;
pub use crate::config::{Config, parse_config};
pub use crate::util::OutputFormat;

/// Name of the application, also the directory name of its configuration.
pub const APP_NAME: &str = "cadence";
