// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};
use jiff::civil::DateTime;

use crate::util::{OutputFormat, parse_datetime};

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .long_help("Output format, falls back to `output_format` of the configuration")
            .value_parser(value_parser!(OutputFormat))
    }

    pub fn get_output_format(matches: &ArgMatches) -> Option<OutputFormat> {
        matches.get_one("output-format").copied()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RuleArgs;

impl RuleArgs {
    pub fn path() -> Arg {
        arg!(<RULE> "Path to the rule file")
            .value_parser(value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    }

    pub fn get_path(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("RULE")
            .cloned()
            .unwrap_or_default()
    }

    pub fn count() -> Arg {
        arg!(-n --count <N> "Maximum number of occurrences to print")
            .value_parser(value_parser!(usize))
    }

    pub fn get_count(matches: &ArgMatches) -> Option<usize> {
        matches.get_one("count").copied()
    }

    pub fn from() -> Arg {
        arg!(--from <DATETIME> "Skip occurrences before this date-time").value_parser(parse_datetime)
    }

    pub fn get_from(matches: &ArgMatches) -> Option<DateTime> {
        matches.get_one("from").copied()
    }

    pub fn to() -> Arg {
        arg!(--to <DATETIME> "Stop after this date-time, inclusive").value_parser(parse_datetime)
    }

    pub fn get_to(matches: &ArgMatches) -> Option<DateTime> {
        matches.get_one("to").copied()
    }
}
