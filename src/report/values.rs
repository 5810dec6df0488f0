//! Per-sink value formatting.
//!
//! Turns a metric's sink into the cells of its summary row:
//! - Counter: total, plus the per-second rate
//! - Gauge: last value, plus `min=` and `max=`
//! - Rate: share of trues, plus pass and fail counts
//! - Trend: one value per configured trend column
//! - Unknown: `[no data]`

use super::types::{MetricData, NO_DATA};
use crate::console_format::{FAIL_MARK, SUCC_MARK};
use crate::metrics::{Metric, Sink};
use crate::trend::TrendColumns;
use std::time::Duration;

/// Primary value and extras of a non-trend metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedValue {
    pub value: String,
    pub extras: Vec<String>,
}

impl From<FormattedValue> for MetricData {
    fn from(f: FormattedValue) -> Self {
        MetricData::Plain { value: f.value, extras: f.extras }
    }
}

/// Format the value and extras of a metric.
///
/// Trend sinks have no single value; they are formatted with
/// `format_trend_values` instead and yield `[no data]` here.
pub fn format_value(elapsed: Duration, time_unit: Option<&str>, metric: &Metric) -> FormattedValue {
    match &metric.sink {
        Sink::Counter(sink) => {
            let secs = elapsed.as_secs_f64();
            let rate = if secs > 0.0 { sink.value / secs } else { 0.0 };
            FormattedValue {
                value: metric.humanize_value(sink.value, time_unit),
                extras: vec![format!("{}/s", metric.humanize_value(rate, time_unit))],
            }
        }
        Sink::Gauge(sink) => FormattedValue {
            value: metric.humanize_value(sink.value, time_unit),
            extras: vec![
                format!("min={}", metric.humanize_value(sink.min, time_unit)),
                format!("max={}", metric.humanize_value(sink.max, time_unit)),
            ],
        },
        // A rate that never saw a sample has no meaningful share
        Sink::Rate(sink) if sink.total == 0 => no_data(),
        Sink::Rate(sink) => FormattedValue {
            value: metric.humanize_value(sink.trues as f64 / sink.total as f64, time_unit),
            extras: vec![format!("{} {}", SUCC_MARK, sink.trues), format!("{} {}", FAIL_MARK, sink.fails())],
        },
        Sink::Trend(_) | Sink::Unknown => no_data(),
    }
}

/// Format one value per trend column, in column order.
///
/// Returns None for metrics that are not trends.
pub fn format_trend_values(time_unit: Option<&str>, metric: &Metric, columns: &TrendColumns) -> Option<Vec<String>> {
    match &metric.sink {
        Sink::Trend(sink) => Some(columns.iter().map(|col| metric.humanize_value(col.get(sink), time_unit)).collect()),
        _ => None,
    }
}

/// Format a metric's cells. Finalizes the sink first.
pub fn format_metric(
    elapsed: Duration,
    time_unit: Option<&str>,
    metric: &mut Metric,
    columns: &TrendColumns,
) -> MetricData {
    metric.sink.calc();
    match format_trend_values(time_unit, metric, columns) {
        Some(cols) => MetricData::Trend(cols),
        None => format_value(elapsed, time_unit, metric).into(),
    }
}

fn no_data() -> FormattedValue {
    FormattedValue { value: NO_DATA.to_string(), extras: Vec::new() }
}
