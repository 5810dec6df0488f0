/// Core data structures for run summaries
///
/// This module defines the group/check tree and the input handed to the
/// summary renderer. Checks and subgroups keep the order in which they
/// were first recorded; that order is the order they are printed in.

use crate::metrics::Metric;
use std::collections::HashMap;
use std::time::Duration;

/// A named pass/fail assertion and how often it passed or failed
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Check {
    pub name: String,
    #[serde(default)]
    pub passes: u64,
    #[serde(default)]
    pub fails: u64,
}

impl Check {
    pub fn new(name: &str) -> Self {
        Check { name: name.to_string(), passes: 0, fails: 0 }
    }

    /// Record one evaluation of this check
    pub fn record(&mut self, passed: bool) {
        if passed {
            self.passes += 1;
        } else {
            self.fails += 1;
        }
    }

    /// Total number of evaluations
    pub fn total(&self) -> u64 {
        self.passes.saturating_add(self.fails)
    }

    pub fn passed(&self) -> bool {
        self.fails == 0
    }

    /// Share of passing evaluations as a whole percentage, truncated
    pub fn pass_percent(&self) -> u64 {
        match self.total() {
            0 => 0,
            _ => (u128::from(self.passes) * 100 / (u128::from(self.passes) + u128::from(self.fails))) as u64,
        }
    }
}

/// A named node in the group tree; the root usually has an empty name
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Group {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub checks: Vec<Check>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl Group {
    pub fn new(name: &str) -> Self {
        Group { name: name.to_string(), ..Default::default() }
    }

    /// The anonymous root group
    pub fn root() -> Self {
        Group::default()
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }

    pub fn check(&self, name: &str) -> Option<&Check> {
        self.checks.iter().find(|c| c.name == name)
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Get a check by name, appending it if it doesn't exist yet
    pub fn check_mut_or_insert(&mut self, name: &str) -> &mut Check {
        let idx = match self.checks.iter().position(|c| c.name == name) {
            Some(idx) => idx,
            None => {
                self.checks.push(Check::new(name));
                self.checks.len() - 1
            }
        };
        &mut self.checks[idx]
    }

    /// Get a subgroup by name, appending it if it doesn't exist yet
    pub fn group_mut_or_insert(&mut self, name: &str) -> &mut Group {
        let idx = match self.groups.iter().position(|g| g.name == name) {
            Some(idx) => idx,
            None => {
                self.groups.push(Group::new(name));
                self.groups.len() - 1
            }
        };
        &mut self.groups[idx]
    }
}

/// Everything the summary renderer needs for one report
#[derive(Debug, Clone, Default)]
pub struct SummaryInput {
    /// Fixed unit for time values ("s", "ms", "us"); None picks per value
    pub time_unit: Option<String>,

    /// Wall-clock duration of the run, used for per-second rates
    pub elapsed: Duration,

    pub root_group: Option<Group>,

    /// Metrics by name; printed sorted by name regardless of map order
    pub metrics: HashMap<String, Metric>,
}

impl SummaryInput {
    pub fn new(elapsed: Duration) -> Self {
        SummaryInput { elapsed, ..Default::default() }
    }

    /// Add a metric under its own name, replacing any previous one
    pub fn insert_metric(&mut self, metric: Metric) {
        self.metrics.insert(metric.name.clone(), metric);
    }
}
