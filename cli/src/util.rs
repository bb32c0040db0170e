// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::Path};

use cadence_core::{RuleDefinition, RuleDraft};
use jiff::civil::{Date, DateTime};
use tokio::fs;

/// The output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON on a single document
    Json,
    /// Aligned, colored rows
    #[default]
    Table,
}

/// Parse a wall-clock date-time such as `1998-01-01`, `1998-01-01 09:00` or
/// `1998-01-01T09:00:00`. A bare date means midnight.
pub fn parse_datetime(s: &str) -> Result<DateTime, String> {
    let s = s.trim();
    if let Ok(dt) = s.parse::<DateTime>() {
        return Ok(dt);
    }
    s.parse::<Date>()
        .map(|d| d.to_datetime(jiff::civil::Time::midnight()))
        .map_err(|_| format!("Invalid date-time '{s}', expected e.g. 1998-01-01 09:00"))
}

pub fn format_datetime(dt: DateTime) -> String {
    dt.strftime("%Y-%m-%d %H:%M:%S").to_string()
}

/// Read a rule file, a TOML document in the serde form of [`RuleDraft`].
pub async fn load_draft(path: &Path) -> Result<RuleDraft, Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read rule file at {}: {}", path.display(), e))?;

    let draft = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse rule file at {}: {}", path.display(), e))?;
    Ok(draft)
}

/// Read and validate a rule file.
pub async fn load_rule(path: &Path) -> Result<RuleDefinition, Box<dyn Error>> {
    let draft = load_draft(path).await?;
    draft
        .build()
        .map_err(|e| format!("Invalid rule in {}: {}", path.display(), e).into())
}
