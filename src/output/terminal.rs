//! Rendering of evaluation results for stdout.

use crate::config::OutputFormat;
use crate::error::EvaluationError;
use crate::models::OverlapStatus;
use colored::Colorize;
use serde::Serialize;

/// JSON shape of one evaluation.
#[derive(Serialize, Debug)]
pub struct Report<'a> {
    pub first: &'a str,
    pub second: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OverlapStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl<'a> Report<'a> {
    pub fn new(
        first: &'a str,
        second: &'a str,
        result: &Result<OverlapStatus, EvaluationError>,
    ) -> Report<'a> {
        match result {
            Ok(status) => Report {
                first,
                second,
                status: Some(*status),
                error: None,
                kind: None,
            },
            Err(e) => Report {
                first,
                second,
                status: None,
                error: Some(e.to_string()),
                kind: Some(e.kind().to_string()),
            },
        }
    }
}

/// Format an evaluation result as a single output line (without newline).
///
/// Text output is the bare status token, or the error message in red.
pub fn format_result(
    first: &str,
    second: &str,
    result: &Result<OverlapStatus, EvaluationError>,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(match result {
            Ok(status) => status.to_string(),
            Err(e) => e.to_string().red().to_string(),
        }),
        OutputFormat::Json => serde_json::to_string(&Report::new(first, second, result)),
    }
}
