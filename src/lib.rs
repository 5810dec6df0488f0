//! End-of-run summaries for checks and metrics.
//!
//! Given a tree of groups and checks plus a set of finalized metrics,
//! [`report::summarize`] prints a column-aligned, optionally colored
//! report:
//!
//! ```text
//!     █ login
//!
//!       ✓ status is 200
//!       ✗ token present
//!        ↳  50% — ✓ 1 / ✗ 1
//!
//!   ✓ checks.........: 75.00% ✓ 3   ✗ 1
//!     http_reqs......: 100    10/s
//! ```

pub mod cli;
pub mod config;
pub mod console_format;
pub mod humanize;
pub mod metrics;
pub mod report;
pub mod trend;
pub mod types;

pub use console_format::{Palette, display_width};
pub use metrics::{CounterSink, GaugeSink, Metric, RateSink, Sink, SubMetric, TrendSink, ValueType};
pub use report::{summarize, summarize_to_string};
pub use trend::{TrendColumn, TrendColumns, TrendStat, TrendStatError};
pub use types::{Check, Group, SummaryInput};
