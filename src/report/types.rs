//! Report type definitions for the rendering model.
//!
//! Metrics are first turned into `MetricRow`s holding plain, uncolored
//! cell text. Widths are measured over those rows, and only then are
//! the rows rendered with colors and padding.

use crate::console_format::Mark;

/// Shown in place of a value when a sink has nothing displayable.
pub const NO_DATA: &str = "[no data]";

/// Indentation added in front of sub-metrics.
pub const SUB_METRIC_INDENT: &str = "  ";

/// Cell content of a metric row.
///
/// A metric shows either a value with extras or one cell per trend
/// column, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricData {
    /// Primary value plus secondary annotations
    Plain { value: String, extras: Vec<String> },
    /// One value per trend column, in column order
    Trend(Vec<String>),
}

impl MetricData {
    pub fn no_data() -> Self {
        MetricData::Plain { value: NO_DATA.to_string(), extras: Vec::new() }
    }
}

/// One metric, formatted but not yet aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRow {
    /// Metric name, the sort key
    pub name: String,
    /// Name as printed: the metric name, or `{ suffix }` for sub-metrics
    pub display_name: String,
    /// Extra indentation for sub-metrics
    pub indent: &'static str,
    pub mark: Mark,
    pub data: MetricData,
}

/// Widest cell seen in each column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    /// Display name plus sub-metric indentation
    pub name: usize,
    /// Primary values of non-trend metrics
    pub value: usize,
    /// Per extra slot, from metrics with more than one extra
    pub extras: Vec<usize>,
    /// Per trend column
    pub trend: Vec<usize>,
}

impl ColumnWidths {
    pub fn extra_width(&self, idx: usize) -> usize {
        self.extras.get(idx).copied().unwrap_or(0)
    }

    pub fn trend_width(&self, idx: usize) -> usize {
        self.trend.get(idx).copied().unwrap_or(0)
    }
}
