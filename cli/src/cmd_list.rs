// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use cadence_core::{Occurrence, RuleDefinition};
use clap::{ArgMatches, Command};
use colored::{Color, Colorize};
use jiff::civil::{DateTime, Weekday};

use crate::arg::{CommonArgs, RuleArgs};
use crate::config::Config;
use crate::table::{Column, PaddingDirection, Table};
use crate::util::{OutputFormat, format_datetime, load_rule};

#[derive(Debug, Clone)]
pub struct CmdList {
    pub path: PathBuf,
    pub count: Option<usize>,
    pub from: Option<DateTime>,
    pub to: Option<DateTime>,
    pub output_format: Option<OutputFormat>,
}

impl CmdList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List the occurrences of a rule")
            .arg(RuleArgs::path())
            .arg(RuleArgs::count())
            .arg(RuleArgs::from())
            .arg(RuleArgs::to())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            path: RuleArgs::get_path(matches),
            count: RuleArgs::get_count(matches),
            from: RuleArgs::get_from(matches),
            to: RuleArgs::get_to(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing occurrences...");
        let rule = load_rule(&self.path).await?;

        let max = self.count.unwrap_or(config.max_occurrences);
        let (occurrences, truncated) = self.select(&rule, max);

        let output_format = self.output_format.unwrap_or(config.output_format);
        match output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&occurrences)?),
            OutputFormat::Table if occurrences.is_empty() => {
                println!("{}", "No occurrences found".italic());
            }
            OutputFormat::Table => {
                let rows: Vec<_> = occurrences.into_iter().enumerate().collect();
                print!("{}", Table::new(&OccurrenceColumn::ALL, &rows));
                if truncated && self.count.is_none() {
                    let prompt = format!("Displaying the first {max} occurrences");
                    println!("{}", prompt.italic());
                }
            }
        }
        Ok(())
    }

    /// Pick at most `max` occurrences inside the requested window, and tell whether
    /// more would follow.
    fn select(&self, rule: &RuleDefinition, max: usize) -> (Vec<Occurrence>, bool) {
        let (from, to) = (self.from, self.to);
        let mut selected: Vec<_> = rule
            .iter()
            .skip_while(|o| from.is_some_and(|from| *o < from))
            .take_while(|o| to.is_none_or(|to| *o <= to))
            .take(max.saturating_add(1))
            .collect();

        let truncated = selected.len() > max;
        selected.truncate(max);
        (selected, truncated)
    }
}

#[derive(Debug, Clone, Copy)]
enum OccurrenceColumn {
    Index,
    DateTime,
    Weekday,
}

impl OccurrenceColumn {
    const ALL: [Self; 3] = [Self::Index, Self::DateTime, Self::Weekday];
}

impl Column<(usize, Occurrence)> for OccurrenceColumn {
    fn format(&self, (index, occurrence): &(usize, Occurrence)) -> String {
        match self {
            Self::Index => format!("#{}", index + 1),
            Self::DateTime => format_datetime(*occurrence),
            Self::Weekday => occurrence.strftime("%a").to_string(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Index => PaddingDirection::Right,
            Self::DateTime | Self::Weekday => PaddingDirection::Left,
        }
    }

    fn get_color(&self, (_, occurrence): &(usize, Occurrence)) -> Option<Color> {
        match self {
            Self::Index => Some(Color::BrightBlack),
            Self::DateTime => None,
            Self::Weekday => match occurrence.weekday() {
                Weekday::Saturday | Weekday::Sunday => Some(Color::Yellow),
                _ => None,
            },
        }
    }
}
