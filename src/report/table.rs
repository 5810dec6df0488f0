//! Aligned metric table.
//!
//! Rendering happens in two passes because no column width is known
//! until every metric has been formatted:
//! 1. `build_rows` formats each metric and `measure_columns` finds the
//!    widest cell per column
//! 2. `format_metric_line` pads every cell to its column's width
//!
//! Rows are always emitted sorted by metric name.

use super::types::{ColumnWidths, MetricData, MetricRow, SUB_METRIC_INDENT};
use super::values::format_metric;
use crate::console_format::{ColorRole, Mark, Palette, display_width, padding_for};
use crate::metrics::Metric;
use crate::trend::TrendColumns;
use log::debug;
use std::collections::HashMap;
use std::time::Duration;

/// Name shown for a metric: `{ suffix }` for sub-metrics, the name otherwise.
pub fn display_name(metric: &Metric) -> String {
    match &metric.sub {
        Some(sub) => format!("{{ {} }}", sub.suffix),
        None => metric.name.clone(),
    }
}

fn indent_for(metric: &Metric) -> &'static str {
    if metric.is_sub_metric() { SUB_METRIC_INDENT } else { "" }
}

/// Format every metric into a row, sorted by metric name.
///
/// Each sink is finalized (`calc()`) on the way.
pub fn build_rows(
    metrics: &mut HashMap<String, Metric>,
    elapsed: Duration,
    time_unit: Option<&str>,
    columns: &TrendColumns,
) -> Vec<MetricRow> {
    let mut rows: Vec<MetricRow> = metrics
        .iter_mut()
        .map(|(name, metric)| MetricRow {
            name: name.clone(),
            display_name: display_name(metric),
            indent: indent_for(metric),
            mark: Mark::from_tainted(metric.tainted),
            data: format_metric(elapsed, time_unit, metric, columns),
        })
        .collect();

    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}

/// Find the widest cell of every column.
///
/// Extras only count for metrics with more than one of them; a lone
/// extra is printed unpadded.
pub fn measure_columns(rows: &[MetricRow], trend_columns: usize) -> ColumnWidths {
    let mut widths = ColumnWidths { trend: vec![0; trend_columns], ..Default::default() };

    for row in rows {
        let name_width = display_width(&row.display_name) + display_width(row.indent);
        widths.name = widths.name.max(name_width);

        match &row.data {
            MetricData::Trend(cols) => {
                if widths.trend.len() < cols.len() {
                    widths.trend.resize(cols.len(), 0);
                }
                for (max, col) in widths.trend.iter_mut().zip(cols) {
                    *max = (*max).max(display_width(col));
                }
            }
            MetricData::Plain { value, extras } => {
                widths.value = widths.value.max(display_width(value));
                if extras.len() > 1 {
                    if widths.extras.len() < extras.len() {
                        widths.extras.resize(extras.len(), 0);
                    }
                    for (max, extra) in widths.extras.iter_mut().zip(extras) {
                        *max = (*max).max(display_width(extra));
                    }
                }
            }
        }
    }

    widths
}

fn format_trend_cells(cols: &[String], widths: &ColumnWidths, columns: &TrendColumns, palette: &Palette) -> String {
    columns
        .iter()
        .zip(cols)
        .enumerate()
        .map(|(i, (col, val))| {
            format!("{}={}{}", col.key, palette.paint(ColorRole::Value, val), padding_for(val, widths.trend_width(i)))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_extras(extras: &[String], widths: &ColumnWidths, palette: &Palette) -> String {
    match extras {
        [] => String::new(),
        [only] => format!(" {}", palette.paint(ColorRole::Extra, only)),
        many => {
            let parts: Vec<String> = many
                .iter()
                .enumerate()
                .map(|(i, ex)| format!("{}{}", palette.paint(ColorRole::Extra, ex), padding_for(ex, widths.extra_width(i))))
                .collect();
            format!(" {}", parts.join(" "))
        }
    }
}

/// Render the data cells of a row, padded to the measured widths.
pub fn format_data(row: &MetricRow, widths: &ColumnWidths, columns: &TrendColumns, palette: &Palette) -> String {
    match &row.data {
        MetricData::Trend(cols) => format_trend_cells(cols, widths, columns, palette),
        MetricData::Plain { value, extras } => format!(
            "{}{}{}",
            palette.paint(ColorRole::Value, value),
            padding_for(value, widths.value),
            format_extras(extras, widths, palette)
        ),
    }
}

/// Render one full metric line, without the trailing newline.
pub fn format_metric_line(
    indent: &str,
    row: &MetricRow,
    widths: &ColumnWidths,
    columns: &TrendColumns,
    palette: &Palette,
) -> String {
    let dots = (widths.name + 3).saturating_sub(display_width(&row.display_name) + display_width(row.indent));
    format!(
        "{}{}{} {}{} {}",
        indent,
        row.indent,
        palette.paint(row.mark.role(), row.mark.as_str()),
        row.display_name,
        palette.paint(ColorRole::Gray, &format!("{}:", ".".repeat(dots))),
        format_data(row, widths, columns, palette)
    )
}

/// Render all metrics as aligned lines, sorted by name.
pub fn format_metrics(
    indent: &str,
    metrics: &mut HashMap<String, Metric>,
    elapsed: Duration,
    time_unit: Option<&str>,
    columns: &TrendColumns,
    palette: &Palette,
) -> String {
    let rows = build_rows(metrics, elapsed, time_unit, columns);
    let widths = measure_columns(&rows, columns.len());
    debug!("Metric column widths: {:?}", widths);

    let mut output = String::new();
    for row in &rows {
        output.push_str(&format_metric_line(indent, row, &widths, columns, palette));
        output.push('\n');
    }
    output
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
