//! Command handlers

use crate::cli::{InitArgs, ValidateArgs};
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use fieldcheck_core::{DocumentType, SystemClock};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Handle the validate command
pub fn handle_validate(args: ValidateArgs, output: &mut OutputWriter) -> Result<()> {
    info!(document = %args.document.display(), schema = %args.schema, "validating");

    if !args.document.exists() {
        return Err(Error::FileNotFound {
            path: args.document.clone(),
        });
    }

    let document = read_document(&args.document)?;
    let schema = lookup_schema(&args.schema)?;

    let report = fieldcheck_core::validate(&schema, &document)?;
    debug!(outcomes = report.len(), "validation finished");

    output.report(&schema, &args.document, &report)?;

    let errors = report.errors().count();
    let warnings = report.warnings().count();
    if report.has_errors() || (args.deny_warnings && warnings > 0) {
        return Err(Error::ValidationFailed { errors, warnings });
    }
    Ok(())
}

/// Handle the schemas command
pub fn handle_schemas(output: &mut OutputWriter) -> Result<()> {
    output.schema_list(&fieldcheck_schemas::all())
}

/// Handle the init command
pub fn handle_init(args: InitArgs, output: &mut OutputWriter) -> Result<()> {
    let schema = lookup_schema(&args.schema)?;
    let seeded = schema.initial_document(&SystemClock);
    output.value(&seeded)
}

fn lookup_schema(name: &str) -> Result<DocumentType> {
    fieldcheck_schemas::find(name).ok_or_else(|| Error::UnknownSchema {
        name: name.to_string(),
    })
}

/// Parse a document file as JSON or, by extension, YAML.
fn read_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    let is_yaml = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false);

    if is_yaml {
        serde_yaml::from_str(&content).map_err(|_| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "YAML".to_string(),
        })
    } else {
        serde_json::from_str(&content).map_err(|_| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "JSON".to_string(),
        })
    }
}
