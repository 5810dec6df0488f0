use crate::config::verify_time_unit;
use crate::trend::TrendColumns;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "run-summary")]
#[command(about = "Print an aligned end-of-run summary of checks and metrics")]
#[command(version)]
pub struct CliArgs {
    /// JSON file describing the finished run (groups, checks, metrics)
    /// Reads from stdin when omitted or "-"
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Statistics to show for trend metrics, in order
    /// Accepts avg, min, med, max and any percentile: "avg,p(90),p(99.9)"
    #[arg(long, value_name = "STATS", value_delimiter = ',')]
    pub summary_trend_stats: Vec<String>,

    /// Show all time values in this unit: s, ms or us (default: pick per value)
    #[arg(long, value_name = "UNIT")]
    pub summary_time_unit: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Indent the whole summary by this many spaces
    #[arg(long, value_name = "COLUMNS", default_value = "0")]
    pub indent: usize,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        let mut args = CliArgs::parse();

        // Allow "avg, p(95)" as well as "avg,p(95)"
        args.summary_trend_stats =
            args.summary_trend_stats.iter().map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect();

        args
    }

    /// Validate argument values
    pub fn validate(&self) -> Result<(), String> {
        let columns = TrendColumns::default();
        for stat in &self.summary_trend_stats {
            columns.verify(stat).map_err(|e| format!("Invalid --summary-trend-stats entry '{}': {}", stat, e))?;
        }

        if let Some(ref unit) = self.summary_time_unit {
            verify_time_unit(unit)?;
        }

        Ok(())
    }

    /// Input path, or None for stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}
