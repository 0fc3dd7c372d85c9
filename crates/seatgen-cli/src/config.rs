//! Seat config files.
//!
//! Two JSON layouts are understood. The structured layout deserializes
//! straight into [`SeatConfig`]. The legacy layout keeps every list in one
//! whitespace-separated string and may quote its counts; it is recognised by
//! its `person_sort_by_height` key.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use seatgen_logic::SeatConfig;
use tracing::info;

/// Key that only the legacy layout carries.
const LEGACY_MARKER: &str = "person_sort_by_height";

/// Load a seat config from a JSON file in either layout.
pub fn load(path: &Path) -> Result<SeatConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read seat config {}", path.display()))?;
    let config =
        parse(&text).with_context(|| format!("invalid seat config {}", path.display()))?;
    info!(
        path = %path.display(),
        rows = config.row_count,
        columns = config.column_count,
        names = config.names.len(),
        "loaded seat config"
    );
    Ok(config)
}

/// Parse config text in either layout.
pub fn parse(text: &str) -> Result<SeatConfig> {
    let value: serde_json::Value = serde_json::from_str(text).context("not valid JSON")?;
    if value.get(LEGACY_MARKER).is_some() {
        let legacy: LegacySeatConfig =
            serde_json::from_value(value).context("malformed legacy seat config")?;
        legacy.into_seat_config()
    } else {
        serde_json::from_value(value).context("malformed seat config")
    }
}

/// A count written either as a JSON number or as a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Count {
    Number(usize),
    Text(String),
}

impl Count {
    fn value(&self, field: &str) -> Result<usize> {
        match self {
            Count::Number(n) => Ok(*n),
            Count::Text(s) if s.trim().is_empty() => Ok(0),
            Count::Text(s) => s
                .trim()
                .parse()
                .with_context(|| format!("{field} is not a count: {s:?}")),
        }
    }
}

/// Flat-string layout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LegacySeatConfig {
    row_count: Option<Count>,
    column_count: Option<Count>,
    random_between_rows: Option<Count>,
    #[serde(alias = "last_row_pos_cannot_be_choosed")]
    last_row_pos_cannot_be_chosen: String,
    person_sort_by_height: String,
    group_leader_list: String,
    separate_list: String,
    lucky_option: bool,
}

impl LegacySeatConfig {
    fn into_seat_config(self) -> Result<SeatConfig> {
        let count = |c: &Option<Count>, field: &str| -> Result<usize> {
            c.as_ref().map_or(Ok(0), |c| c.value(field))
        };
        let row_count = count(&self.row_count, "row_count")?;
        let column_count = count(&self.column_count, "column_count")?;
        let shuffled_row_count = match count(&self.random_between_rows, "random_between_rows")? {
            0 => row_count,
            n => n,
        };

        let disabled_last_row_positions = self
            .last_row_pos_cannot_be_chosen
            .split_whitespace()
            .map(|token| match token.parse::<usize>() {
                Ok(0) | Err(_) => {
                    bail!("last-row position {token:?} is not a 1-based column number")
                }
                Ok(n) => Ok(n - 1),
            })
            .collect::<Result<BTreeSet<_>>>()?;

        let names = split_names(&self.person_sort_by_height);
        let leaders: BTreeSet<String> = split_names(&self.group_leader_list).into_iter().collect();
        let separated_pairs = parse_pairs(&self.separate_list)?;

        Ok(SeatConfig {
            row_count,
            column_count,
            shuffled_row_count,
            disabled_last_row_positions,
            names,
            find_leaders: !leaders.is_empty(),
            leaders,
            separated_pairs,
            find_lucky: self.lucky_option,
        })
    }
}

fn split_names(list: &str) -> Vec<String> {
    list.split_whitespace().map(str::to_string).collect()
}

/// One pair per line: the first name, a space, then the rest of the line.
fn parse_pairs(list: &str) -> Result<Vec<(String, String)>> {
    list.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once(' ') {
            Some((a, b)) if !b.trim().is_empty() => Ok((a.to_string(), b.trim().to_string())),
            _ => bail!("separated pair {line:?} needs two names"),
        })
        .collect()
}
