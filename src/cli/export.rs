//! CLI commands for data export
//!
//! Writes the current view to a file, or to stdout when no file is given.

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_view_csv, export_view_json, export_view_yaml};
use crate::models::Expense;
use crate::reports::ExpenseFilter;
use crate::storage::Storage;

use super::FilterArgs;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expenses only)
    Csv,
    /// JSON format (expenses and summary)
    Json,
    /// YAML format (expenses and summary, human-readable)
    Yaml,
}

/// Arguments for exporting the current view
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Handle the export command
pub fn handle_export(storage: &Storage, args: ExportArgs) -> ExpenseResult<()> {
    let filter = ExpenseFilter::from(args.filter);
    let expenses = storage.expenses.expenses();

    match &args.output {
        Some(output) => {
            let file = File::create(output).map_err(|e| {
                ExpenseError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            write_view(expenses, &filter, args.format, args.pretty, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ExpenseError::Export(e.to_string()))?;
            println!("View exported to: {}", output.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_view(expenses, &filter, args.format, args.pretty, &mut writer)?;
            if matches!(args.format, ExportFormat::Json) {
                writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
            }
        }
    }

    Ok(())
}

fn write_view<W: Write>(
    expenses: &[Expense],
    filter: &ExpenseFilter,
    format: ExportFormat,
    pretty: bool,
    writer: &mut W,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => {
            let count = export_view_csv(expenses, filter, &mut *writer)?;
            tracing::debug!(count, "exported csv rows");
        }
        ExportFormat::Json => export_view_json(expenses, filter, writer, pretty)?,
        ExportFormat::Yaml => export_view_yaml(expenses, filter, writer)?,
    }
    Ok(())
}
