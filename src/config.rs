/// Configuration resolution module
///
/// This module handles:
/// - Building a SummaryConfig from CLI arguments
/// - Loading the finished run from JSON into a SummaryInput
/// - Reconciling settings given both on the command line and in the input
use crate::cli::CliArgs;
use crate::console_format::Palette;
use crate::metrics::{Metric, SubMetric};
use crate::trend::TrendColumns;
use crate::types::{Group, SummaryInput};
use log::debug;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Units accepted for `--summary-time-unit`
pub const TIME_UNITS: [&str; 3] = ["s", "ms", "us"];

/// Fully resolved rendering settings
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub columns: TrendColumns,
    /// Overrides the time unit given in the input, when set
    pub time_unit: Option<String>,
    pub use_colors: bool,
    pub indent: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        SummaryConfig { columns: TrendColumns::default(), time_unit: None, use_colors: false, indent: String::new() }
    }
}

impl SummaryConfig {
    pub fn palette(&self) -> Palette {
        Palette::new(self.use_colors)
    }

    /// Apply settings that take precedence over the input file
    pub fn apply_to(&self, input: &mut SummaryInput) {
        if let Some(ref unit) = self.time_unit {
            input.time_unit = Some(unit.clone());
        }
    }
}

/// Check that a time unit is one the humanizer understands
pub fn verify_time_unit(unit: &str) -> Result<(), String> {
    if TIME_UNITS.contains(&unit) {
        Ok(())
    } else {
        Err(format!("Invalid time unit '{}', expected one of: {}", unit, TIME_UNITS.join(", ")))
    }
}

/// Build a SummaryConfig from CLI arguments
///
/// Trend stats are applied on top of the default columns, so an entry
/// list that yields nothing usable keeps the defaults.
pub fn build_summary_config(args: &CliArgs) -> Result<SummaryConfig, String> {
    args.validate()?;

    let mut columns = TrendColumns::default();
    if !args.summary_trend_stats.is_empty() {
        columns.update(&args.summary_trend_stats);
    }

    let use_colors = !args.no_color && env::var_os("NO_COLOR").is_none() && term::stdout().is_some();
    debug!("Trend columns: {}, colors: {}", columns, use_colors);

    Ok(SummaryConfig {
        columns,
        time_unit: args.summary_time_unit.clone(),
        use_colors,
        indent: " ".repeat(args.indent),
    })
}

/// On-disk shape of a finished run
#[derive(Debug, serde::Deserialize)]
struct SummaryFile {
    #[serde(default)]
    elapsed_ms: f64,
    #[serde(default)]
    time_unit: Option<String>,
    #[serde(default)]
    root_group: Option<Group>,
    #[serde(default)]
    metrics: HashMap<String, Metric>,
}

/// Parse a finished run from JSON
///
/// Metrics take their name from their key when the entry doesn't carry
/// one, and `name{tag:value}` keys mark sub-metrics.
pub fn parse_summary_input(json: &str) -> Result<SummaryInput, String> {
    let file: SummaryFile = serde_json::from_str(json).map_err(|e| format!("Failed to parse summary input: {}", e))?;

    if !file.elapsed_ms.is_finite() || file.elapsed_ms < 0.0 {
        return Err(format!("Invalid elapsed_ms: {}", file.elapsed_ms));
    }

    let elapsed =
        Duration::try_from_secs_f64(file.elapsed_ms / 1000.0).map_err(|e| format!("Invalid elapsed_ms: {}", e))?;

    if let Some(ref unit) = file.time_unit {
        verify_time_unit(unit)?;
    }

    let metrics = file
        .metrics
        .into_iter()
        .map(|(key, mut metric)| {
            if metric.name.is_empty() {
                metric.name = key.clone();
            }
            if metric.sub.is_none() {
                metric.sub = SubMetric::parse(&metric.name);
            }
            (key, metric)
        })
        .collect::<HashMap<_, _>>();

    debug!("Loaded {} metrics, elapsed {}ms", metrics.len(), file.elapsed_ms);

    Ok(SummaryInput {
        time_unit: file.time_unit,
        elapsed,
        root_group: file.root_group,
        metrics,
    })
}

/// Load a finished run from a JSON file, or from stdin when no path is given
pub fn load_summary_input(path: Option<&Path>) -> Result<SummaryInput, String> {
    let json = match path {
        Some(path) => {
            debug!("Reading summary input from {:?}", path);
            fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?
        }
        None => {
            debug!("Reading summary input from stdin");
            io::read_to_string(io::stdin()).map_err(|e| format!("Failed to read stdin: {}", e))?
        }
    };
    parse_summary_input(&json)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
