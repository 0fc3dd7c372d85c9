//! Writing seat tables to disk.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use seatgen_logic::SeatTable;
use tracing::info;

/// Output format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Text,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => ExportFormat::Json,
            Some("csv") => ExportFormat::Csv,
            _ => ExportFormat::Text,
        }
    }
}

/// The table as export records: a column header, one record per row with
/// leaders starred, then the lucky person and the seed.
pub fn records(table: &SeatTable) -> Vec<Vec<String>> {
    let mut records = Vec::with_capacity(table.rows() + 3);
    records.push(
        (1..=table.columns())
            .map(|c| format!("Column {c}"))
            .collect(),
    );
    for (r, row) in table.iter_rows().enumerate() {
        records.push(
            row.iter()
                .enumerate()
                .map(|(c, name)| {
                    if table.is_leader(r, c) {
                        format!("*{name}*")
                    } else {
                        name.to_string()
                    }
                })
                .collect(),
        );
    }
    if let Some(lucky) = table.lucky_person() {
        records.push(vec!["Lucky Person".into(), lucky.into()]);
    }
    records.push(vec!["Seed".into(), table.seed().unwrap_or_default().into()]);
    records
}

pub fn render(table: &SeatTable, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => {
            serde_json::to_string_pretty(table).context("failed to serialize seat table")
        }
        ExportFormat::Csv => {
            let mut writer = csv::WriterBuilder::new()
                .flexible(true)
                .from_writer(Vec::new());
            for record in records(table) {
                writer.write_record(&record)?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| anyhow!("failed to flush csv: {}", e.error()))?;
            String::from_utf8(bytes).context("csv output is not UTF-8")
        }
        ExportFormat::Text => Ok(records(table)
            .iter()
            .map(|record| record.join("\t") + "\n")
            .collect()),
    }
}

/// Write `table` to `path` in the format its extension names.
pub fn export(table: &SeatTable, path: &Path) -> Result<()> {
    let format = ExportFormat::from_path(path);
    let body = render(table, format)?;
    fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), ?format, "exported seat table");
    Ok(())
}
