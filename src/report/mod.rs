//! Summary report generation.
//!
//! This module handles:
//! - Formatting each metric's sink into display cells
//! - Measuring and aligning the metric table
//! - Rendering the group/check tree
//! - Writing the complete summary to a stream
//!
//! Low-level width, padding and color handling lives in the
//! console_format module.
//!
//! # Module Organization
//!
//! - `types` - Rendering model (MetricRow, MetricData, ColumnWidths)
//! - `values` - Per-sink value and extra formatting
//! - `table` - Two-pass column measurement and metric line rendering
//! - `groups` - Group tree and check rendering
//! - `summary` - Top-level summary writer

mod groups;
mod summary;
mod table;
mod types;
mod values;

// Re-export types
pub use types::{ColumnWidths, MetricData, MetricRow, NO_DATA};

// Re-export formatting functions
pub use groups::{format_check, format_group};
pub use table::{build_rows, display_name, format_metric_line, format_metrics, measure_columns};
pub use values::{FormattedValue, format_metric, format_trend_values, format_value};

// Re-export summary entry points
pub use summary::{SummaryWriter, summarize, summarize_to_string};
