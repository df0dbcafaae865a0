//! CSV output.
//!
//! One header row, then one row per successfully analyzed page. Columns are
//! `label` followed by every report field in serialization order.

use anyhow::{Context, Result};
use csv::Writer;
use serde_json::Value;
use std::io::Write;

use crate::config::{COMPETITOR_LABEL, PRIMARY_LABEL};
use crate::models::MetricReport;
use crate::AnalysisOutcome;

/// Flattens a report into `(field, value)` pairs in serialization order.
fn report_fields(report: &MetricReport) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(report).context("Failed to serialize report")?;
    let Value::Object(map) = value else {
        anyhow::bail!("report did not serialize to an object");
    };

    Ok(map
        .into_iter()
        .map(|(key, value)| {
            let cell = match value {
                Value::String(s) => s,
                Value::Null => String::new(),
                other => other.to_string(),
            };
            (key, cell)
        })
        .collect())
}

/// Writes the outcome as CSV.
///
/// A failed competitor analysis has no row.
pub fn write_csv<W: Write>(outcome: &AnalysisOutcome, writer: W) -> Result<()> {
    let mut writer = Writer::from_writer(writer);

    let mut rows = vec![(PRIMARY_LABEL, report_fields(&outcome.primary)?)];
    if let Some(Ok(report)) = &outcome.competitor {
        rows.push((COMPETITOR_LABEL, report_fields(report)?));
    }

    let header = std::iter::once("label").chain(rows[0].1.iter().map(|(key, _)| key.as_str()));
    writer.write_record(header)?;

    for (label, fields) in &rows {
        let record = std::iter::once(*label).chain(fields.iter().map(|(_, value)| value.as_str()));
        writer.write_record(record)?;
    }

    writer.flush()?;
    Ok(())
}
