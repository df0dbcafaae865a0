//! Presentation of analysis results.
//!
//! Renders the primary report and the optional competitor result as:
//! - `text`: labeled cards per field group, ✅/❌ for booleans
//! - `json`: one document with `primary`, `competitor` and `competitorError`
//! - `csv`: a header row plus one row per analyzed page
//!
//! Output goes to stdout or to a file.

mod csv;
mod json;
mod text;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::config::OutputFormat;
use crate::AnalysisOutcome;

pub use self::csv::write_csv;
pub use json::write_json;
pub use text::write_text;

/// Wrapper around a Write that ignores broken pipe errors (EPIPE).
/// This allows graceful handling when stdout is piped to a command that exits early.
pub(crate) struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}

/// Writes `outcome` in `format` to `writer`.
pub fn write_outcome<W: Write>(
    outcome: &AnalysisOutcome,
    format: OutputFormat,
    writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(outcome, writer),
        OutputFormat::Json => write_json(outcome, writer),
        OutputFormat::Csv => write_csv(outcome, writer),
    }
}

/// Whether a competitor failure must also go to stderr.
///
/// Text output already prints it under the competitor heading.
pub fn needs_competitor_notice(format: OutputFormat) -> bool {
    format != OutputFormat::Text
}

/// Renders `outcome` to the file at `output`, or to stdout when `None`.
///
/// # Errors
///
/// Returns an error if the output file cannot be created or written.
pub fn render(outcome: &AnalysisOutcome, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(IgnoreBrokenPipe::new(io::stdout().lock())),
    };
    write_outcome(outcome, format, writer)?;

    if let Some(path) = output {
        log::info!("Results written to {}", path.display());
    }
    Ok(())
}
