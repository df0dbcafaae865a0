//! JSON output.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::models::MetricReport;
use crate::AnalysisOutcome;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    primary: &'a MetricReport,
    competitor: Option<&'a MetricReport>,
    competitor_error: Option<String>,
}

impl<'a> From<&'a AnalysisOutcome> for JsonOutput<'a> {
    fn from(outcome: &'a AnalysisOutcome) -> Self {
        let (competitor, competitor_error) = match &outcome.competitor {
            Some(Ok(report)) => (Some(report), None),
            Some(Err(e)) => (None, Some(e.user_message())),
            None => (None, None),
        };
        Self {
            primary: &outcome.primary,
            competitor,
            competitor_error,
        }
    }
}

/// Writes the outcome as one pretty-printed JSON document.
pub fn write_json<W: Write>(outcome: &AnalysisOutcome, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &JsonOutput::from(outcome))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
