// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fmt::Display, path::PathBuf};

use cadence_core::{Limit, RuleDefinition};
use clap::{ArgMatches, Command};
use colored::{Color, Colorize};

use crate::arg::{CommonArgs, RuleArgs};
use crate::config::Config;
use crate::table::{Column, PaddingDirection, Table};
use crate::util::{OutputFormat, format_datetime, load_rule};

#[derive(Debug, Clone)]
pub struct CmdCheck {
    pub path: PathBuf,
    pub output_format: Option<OutputFormat>,
}

impl CmdCheck {
    pub const NAME: &str = "check";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Validate a rule file and summarize the rule")
            .arg(RuleArgs::path())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            path: RuleArgs::get_path(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "checking rule...");
        let rule = load_rule(&self.path).await?;

        match self.output_format.unwrap_or(config.output_format) {
            // The normalized draft, with sorted sets and explicit defaults
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rule.draft())?),
            OutputFormat::Table => {
                println!("{} {}", "Valid rule:".green(), self.path.display());
                let rows = summarize(&rule);
                print!("{}", Table::new(&SummaryColumn::ALL, &rows));
            }
        }
        Ok(())
    }
}

/// One `(field, value)` line per set property of the rule.
fn summarize(rule: &RuleDefinition) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("frequency", rule.frequency().to_string()),
        ("interval", rule.interval().to_string()),
        ("anchor", format_datetime(rule.anchor())),
    ];
    match rule.limit() {
        Some(Limit::Count(count)) => rows.push(("count", count.to_string())),
        Some(Limit::Until(until)) => rows.push(("until", format_datetime(until))),
        None => rows.push(("limit", "none".to_string())),
    }

    let sets = [
        ("by_month", join(rule.by_month())),
        ("by_month_day", join(rule.by_month_day())),
        ("by_year_day", join(rule.by_year_day())),
        ("by_week_no", join(rule.by_week_no())),
        ("by_weekday", join(rule.by_weekday())),
        ("by_hour", join(rule.by_hour())),
        ("by_minute", join(rule.by_minute())),
        ("by_second", join(rule.by_second())),
        ("by_set_pos", join(rule.by_set_pos())),
    ];
    rows.extend(sets.into_iter().filter(|(_, v)| !v.is_empty()));
    rows.push(("week_start", rule.week_start().to_string()));

    let first = rule.iter().next().map_or_else(|| "none".to_string(), format_datetime);
    rows.push(("first", first));
    rows
}

fn join<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Debug, Clone, Copy)]
enum SummaryColumn {
    Field,
    Value,
}

impl SummaryColumn {
    const ALL: [Self; 2] = [Self::Field, Self::Value];
}

impl Column<(&'static str, String)> for SummaryColumn {
    fn format(&self, (field, value): &(&'static str, String)) -> String {
        match self {
            Self::Field => (*field).to_string(),
            Self::Value => value.clone(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _: &(&'static str, String)) -> Option<Color> {
        match self {
            Self::Field => Some(Color::Cyan),
            Self::Value => None,
        }
    }
}
