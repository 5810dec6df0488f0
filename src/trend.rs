//! Trend columns: which statistics are shown for trend metrics.
//!
//! The set of columns is configured once at startup (usually from
//! `--summary-trend-stats`) and then passed by reference into the
//! renderer. Columns render left to right in the order they are listed.

use crate::metrics::TrendSink;
use log::{debug, warn};
use std::fmt;
use thiserror::Error;

/// Reasons a trend stat string is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrendStatError {
    #[error("invalid stat, empty string")]
    EmptyStat,
    #[error("invalid stat, unknown format")]
    UnknownFormat,
    #[error("invalid percentile stat value, accepts a number")]
    InvalidPercentileValue,
}

/// Statistic pulled out of a trend sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrendStat {
    Avg,
    Min,
    Med,
    Max,
    /// Percentile as a fraction (0.95 for p(95))
    Percentile(f64),
}

impl TrendStat {
    pub fn value(&self, sink: &TrendSink) -> f64 {
        match *self {
            TrendStat::Avg => sink.avg,
            TrendStat::Min => sink.min,
            TrendStat::Med => sink.med,
            TrendStat::Max => sink.max,
            TrendStat::Percentile(pct) => sink.p(pct),
        }
    }
}

/// A named column in the trend section of the summary.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendColumn {
    pub key: String,
    pub stat: TrendStat,
}

impl TrendColumn {
    pub fn new(key: &str, stat: TrendStat) -> Self {
        TrendColumn { key: key.to_string(), stat }
    }

    /// Extract this column's value from a sink
    pub fn get(&self, sink: &TrendSink) -> f64 {
        self.stat.value(sink)
    }
}

/// Ordered list of trend columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendColumns {
    columns: Vec<TrendColumn>,
}

impl Default for TrendColumns {
    fn default() -> Self {
        TrendColumns {
            columns: vec![
                TrendColumn::new("avg", TrendStat::Avg),
                TrendColumn::new("min", TrendStat::Min),
                TrendColumn::new("med", TrendStat::Med),
                TrendColumn::new("max", TrendStat::Max),
                TrendColumn::new("p(90)", TrendStat::Percentile(0.90)),
                TrendColumn::new("p(95)", TrendStat::Percentile(0.95)),
            ],
        }
    }
}

impl TrendColumns {
    pub fn iter(&self) -> std::slice::Iter<'_, TrendColumn> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.key.as_str()).collect()
    }

    fn find(&self, key: &str) -> Option<&TrendColumn> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Check whether `stat` names a known column or a valid percentile.
    pub fn verify(&self, stat: &str) -> Result<(), TrendStatError> {
        if stat.is_empty() {
            return Err(TrendStatError::EmptyStat);
        }
        if self.find(stat).is_some() {
            return Ok(());
        }
        parse_percentile(stat).map(|_| ())
    }

    /// Replace the columns with the requested stats, in the given order.
    ///
    /// Each stat is either a percentile (`p(99.9)`) or the key of one of the
    /// current columns. Anything else is dropped. If nothing survives, the
    /// current columns are kept.
    pub fn update<S: AsRef<str>>(&mut self, stats: &[S]) {
        let mut updated = Vec::with_capacity(stats.len());

        for stat in stats {
            let stat: &str = stat.as_ref();
            if let Ok(pct) = parse_percentile(stat) {
                updated.push(TrendColumn::new(stat, TrendStat::Percentile(pct)));
                continue;
            }
            match self.find(stat) {
                Some(col) => updated.push(col.clone()),
                None => warn!("Ignoring unknown trend stat {:?}", stat),
            }
        }

        if updated.is_empty() {
            debug!("No usable trend stats given, keeping {:?}", self.keys());
            return;
        }

        self.columns = updated;
        debug!("Trend columns set to {:?}", self.keys());
    }
}

impl<'a> IntoIterator for &'a TrendColumns {
    type Item = &'a TrendColumn;
    type IntoIter = std::slice::Iter<'a, TrendColumn>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TrendColumns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keys().join(","))
    }
}

/// Parse a `p(N)` stat into the percentile fraction `N / 100`.
pub fn parse_percentile(stat: &str) -> Result<f64, TrendStatError> {
    if stat.is_empty() {
        return Err(TrendStatError::EmptyStat);
    }

    let body = stat
        .strip_prefix("p(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(TrendStatError::UnknownFormat)?;

    let percentile: f64 = body.parse().map_err(|_| TrendStatError::InvalidPercentileValue)?;

    Ok(percentile / 100.0)
}

#[cfg(test)]
#[path = "trend_test.rs"]
mod trend_test;
