//! Summary output: groups and checks first, then the metric table.

use super::groups::format_group;
use super::table::format_metrics;
use crate::console_format::Palette;
use crate::trend::TrendColumns;
use crate::types::{Group, SummaryInput};
use log::{debug, warn};
use std::io::{self, Write};

/// Extra indentation of the group tree relative to the base indent.
pub const GROUPS_INDENT: &str = "    ";

/// Extra indentation of the metric table relative to the base indent.
pub const METRICS_INDENT: &str = "  ";

/// Writer for summary output - configurable for color/plain text
pub struct SummaryWriter<'a, W: Write> {
    writer: W,
    palette: Palette,
    columns: &'a TrendColumns,
}

impl<'a, W: Write> SummaryWriter<'a, W> {
    /// Create a new summary writer
    pub fn new(writer: W, palette: Palette, columns: &'a TrendColumns) -> Self {
        Self { writer, palette, columns }
    }

    /// Write the group tree
    pub fn write_groups(&mut self, indent: &str, root: &Group) -> io::Result<()> {
        write!(self.writer, "{}", format_group(indent, root, &self.palette))
    }

    /// Write the aligned metric table. Finalizes every sink.
    pub fn write_metrics(&mut self, indent: &str, input: &mut SummaryInput) -> io::Result<()> {
        let output = format_metrics(
            indent,
            &mut input.metrics,
            input.elapsed,
            input.time_unit.as_deref(),
            self.columns,
            &self.palette,
        );
        write!(self.writer, "{}", output)
    }

    /// Write the whole summary
    pub fn write_summary(&mut self, indent: &str, input: &mut SummaryInput) -> io::Result<()> {
        if let Some(root) = &input.root_group {
            self.write_groups(&format!("{}{}", indent, GROUPS_INDENT), root)?;
        }
        self.write_metrics(&format!("{}{}", indent, METRICS_INDENT), input)?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Print a human readable summary of a finished run.
///
/// Output is best effort: write errors are logged, never returned.
pub fn summarize<W: Write>(
    writer: W,
    indent: &str,
    input: &mut SummaryInput,
    columns: &TrendColumns,
    palette: Palette,
) {
    debug!(
        "Summarizing {} metrics over {:?} with trend columns [{}]",
        input.metrics.len(),
        input.elapsed,
        columns
    );
    let mut summary = SummaryWriter::new(writer, palette, columns);
    if let Err(e) = summary.write_summary(indent, input) {
        warn!("Failed to write summary: {}", e);
    }
}

/// Render the summary into a string.
pub fn summarize_to_string(indent: &str, input: &mut SummaryInput, columns: &TrendColumns, palette: Palette) -> String {
    let mut buf = Vec::new();
    summarize(&mut buf, indent, input, columns, palette);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;
