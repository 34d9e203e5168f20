//! Report formatting.

use std::fs;
use std::path::Path;

use cardstmt_core::models::statement::StatementRecord;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

const CSV_HEADER: [&str; 7] = [
    "issuer",
    "last4Digits",
    "dueDate",
    "totalDue",
    "statementPeriod",
    "sourceFile",
    "error",
];

pub fn format_records(
    records: &[StatementRecord],
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Json => Ok(serde_json::to_string(records)?),
        OutputFormat::Csv => format_csv(records),
        OutputFormat::Text => Ok(records.iter().map(format_text).collect::<Vec<_>>().join("\n")),
    }
}

/// Write a report, creating parent directories as needed.
pub fn write_report(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    Ok(())
}

fn format_csv(records: &[StatementRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER)?;

    for record in records {
        wtr.write_record([
            record.issuer.as_str(),
            record.last4_digits.as_deref().unwrap_or(""),
            record.due_date.as_deref().unwrap_or(""),
            record.total_due.as_deref().unwrap_or(""),
            record.statement_period.as_deref().unwrap_or(""),
            record.source_file.as_str(),
            record.error.as_deref().unwrap_or(""),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &StatementRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("File:   {}\n", record.source_file));
    output.push_str(&format!("Issuer: {}\n", record.issuer));

    if let Some(error) = &record.error {
        output.push_str(&format!("Error:  {}\n", error));
        return output;
    }

    let fields = [
        ("Card", &record.last4_digits),
        ("Due", &record.due_date),
        ("Total", &record.total_due),
        ("Period", &record.statement_period),
    ];
    for (label, value) in fields {
        output.push_str(&format!(
            "{:<7} {}\n",
            format!("{}:", label),
            value.as_deref().unwrap_or("-")
        ));
    }

    output
}
