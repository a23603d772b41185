//! Rendering the grouped results to stdout or a file.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::config::Config;
use crate::core::constants::{output_formats, report};
use crate::core::error::{Result, StatusCheckError};
use crate::core::types::CandidateUrl;
use crate::probe::RunSummary;

/// Where the report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    Stdout,
    File(PathBuf),
}

impl ReportDestination {
    pub fn from_config(config: &Config) -> Self {
        match config.outfile {
            Some(ref path) => ReportDestination::File(PathBuf::from(path)),
            None => ReportDestination::Stdout,
        }
    }

    /// Open the destination for writing.
    ///
    /// Files are created (and truncated) here, so callers open the sink
    /// before probing to fail fast on an unwritable path.
    pub fn open(&self) -> Result<ReportSink> {
        match self {
            ReportDestination::Stdout => Ok(ReportSink {
                writer: Box::new(io::stdout()),
                label: "stdout".to_string(),
                is_stdout: true,
            }),
            ReportDestination::File(path) => {
                let file = File::create(path).map_err(|source| StatusCheckError::Output {
                    path: path.display().to_string(),
                    source,
                })?;
                Ok(ReportSink {
                    writer: Box::new(BufWriter::new(file)),
                    label: path.display().to_string(),
                    is_stdout: false,
                })
            }
        }
    }
}

/// An opened report destination.
pub struct ReportSink {
    writer: Box<dyn Write + Send>,
    label: String,
    is_stdout: bool,
}

impl ReportSink {
    /// Wrap an arbitrary writer, treated like a file destination.
    pub fn from_writer<W: Write + Send + 'static>(writer: W, label: impl Into<String>) -> Self {
        Self {
            writer: Box::new(writer),
            label: label.into(),
            is_stdout: false,
        }
    }

    pub fn is_stdout(&self) -> bool {
        self.is_stdout
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn write_all(&mut self, content: &str) -> Result<()> {
        self.writer
            .write_all(content.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|source| StatusCheckError::Output {
                path: self.label.clone(),
                source,
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn parse(format: &str) -> Result<Self> {
        match format {
            output_formats::TEXT => Ok(ReportFormat::Text),
            output_formats::JSON => Ok(ReportFormat::Json),
            other => Err(StatusCheckError::InvalidArgument(format!(
                "Unknown report format '{other}'"
            ))),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    total_probed: usize,
    errors: usize,
    statuses: BTreeMap<&'a str, &'a [CandidateUrl]>,
}

/// Formats a [`RunSummary`] into the final report.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    format: ReportFormat,
    sort: bool,
}

impl Reporter {
    pub fn new(format: ReportFormat, sort: bool) -> Self {
        Self { format, sort }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            ReportFormat::parse(config.output_format())?,
            config.sort_output(),
        ))
    }

    /// Render the report without writing it anywhere.
    pub fn render(&self, summary: &RunSummary) -> Result<String> {
        match self.format {
            ReportFormat::Text => Ok(self.render_text(summary)),
            ReportFormat::Json => self.render_json(summary),
        }
    }

    /// Write the report to an opened sink.
    ///
    /// Text reports on stdout get one leading blank line to set them apart
    /// from the console chatter above.
    pub fn write(&self, summary: &RunSummary, sink: &mut ReportSink) -> Result<()> {
        let mut content = self.render(summary)?;
        if sink.is_stdout() && self.format == ReportFormat::Text {
            content.insert(0, '\n');
        }
        sink.write_all(&content)
    }

    fn render_text(&self, summary: &RunSummary) -> String {
        let entries: Vec<(&str, &[CandidateUrl])> = if self.sort {
            summary.grouping.sorted()
        } else {
            summary.grouping.iter().collect()
        };

        let mut out = String::new();
        for (status, urls) in entries {
            out.push_str(report::STATUS_HEADER_PREFIX);
            out.push_str(status);
            out.push('\n');
            for url in urls {
                out.push_str(url.as_str());
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    fn render_json(&self, summary: &RunSummary) -> Result<String> {
        let report = JsonReport {
            generated_at: chrono::Utc::now()
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            total_probed: summary.dispatched,
            errors: summary.errors,
            statuses: summary.grouping.iter().collect(),
        };
        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }
}
