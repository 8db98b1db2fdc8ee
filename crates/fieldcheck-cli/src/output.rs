//! Output formatting and writing utilities
//!
//! Renders validation reports, schema listings, and seeded documents in
//! human-readable or machine formats (JSON, pretty JSON, YAML).

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use fieldcheck_core::{DocumentType, Report, Severity, ValidationOutcome};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Machine-readable envelope around one validation report.
#[derive(Serialize)]
struct ReportEnvelope<'a> {
    schema: &'a str,
    document: String,
    valid: bool,
    errors: usize,
    warnings: usize,
    outcomes: &'a [ValidationOutcome],
}

/// One row of the schema listing.
#[derive(Serialize)]
struct SchemaRow {
    name: String,
    title: String,
    fields: usize,
}

/// Output writer that handles the different output formats
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
    quiet: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat, color: bool, quiet: bool) -> Self {
        Self {
            format,
            color,
            quiet,
        }
    }

    /// Print a validation report.
    pub fn report(&mut self, schema: &DocumentType, document: &Path, report: &Report) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                self.print_report_human(schema, document, report);
                Ok(())
            }
            _ => {
                let envelope = ReportEnvelope {
                    schema: &schema.name,
                    document: document.display().to_string(),
                    valid: !report.has_errors(),
                    errors: report.errors().count(),
                    warnings: report.warnings().count(),
                    outcomes: report.outcomes(),
                };
                self.print_serialized(&envelope)
            }
        }
    }

    /// Print the schema listing.
    pub fn schema_list(&mut self, schemas: &[DocumentType]) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                for schema in schemas {
                    let line = format!(
                        "{:<12} {} ({} fields)",
                        schema.name,
                        schema.title,
                        schema.fields.len()
                    );
                    println!("{}", line);
                }
                Ok(())
            }
            _ => {
                let rows: Vec<SchemaRow> = schemas
                    .iter()
                    .map(|s| SchemaRow {
                        name: s.name.clone(),
                        title: s.title.clone(),
                        fields: s.fields.len(),
                    })
                    .collect();
                self.print_serialized(&rows)
            }
        }
    }

    /// Print an arbitrary document value (used by `init`).
    pub fn value(&mut self, value: &Value) -> Result<()> {
        match self.format {
            // Human gets pretty JSON; a seeded document is data either way.
            OutputFormat::Human | OutputFormat::JsonPretty => {
                println!("{}", serde_json::to_string_pretty(value)?);
                Ok(())
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(value)?);
                Ok(())
            }
            OutputFormat::Yaml => {
                print!("{}", serde_yaml::to_string(value)?);
                Ok(())
            }
        }
    }

    fn print_serialized<T: Serialize>(&self, value: &T) -> Result<()> {
        let rendered = match self.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Yaml => serde_yaml::to_string(value)?.trim_end().to_string(),
            _ => serde_json::to_string_pretty(value)?,
        };
        println!("{}", rendered);
        Ok(())
    }

    fn print_report_human(&self, schema: &DocumentType, document: &Path, report: &Report) {
        if report.is_empty() {
            let line = format!("{}: valid {}", document.display(), schema.name);
            if self.color {
                println!("{} {}", "✓".green().bold(), line);
            } else {
                println!("✓ {}", line);
            }
            return;
        }

        for outcome in report {
            println!("{}", format_outcome_human(outcome, self.color));
        }

        let errors = report.errors().count();
        let warnings = report.warnings().count();
        if !self.quiet {
            println!();
            println!("{} error(s), {} warning(s)", errors, warnings);
        }
    }
}

fn format_outcome_human(outcome: &ValidationOutcome, color: bool) -> String {
    let (marker, severity) = match outcome.severity {
        Severity::Error => ("✗", "error"),
        Severity::Warning => ("⚠", "warning"),
    };
    let line = format!(
        "{} {} — {} [{}]",
        marker, outcome.path, outcome.message, severity
    );
    if color {
        match outcome.severity {
            Severity::Error => line.red().to_string(),
            Severity::Warning => line.yellow().to_string(),
        }
    } else {
        line
    }
}
