/// Metric data model
///
/// A metric pairs a name with a finalized aggregation (its sink). The
/// renderer only reads sinks; the one thing it asks of them is an
/// idempotent `calc()` so derived statistics are up to date.

/// What kind of quantity a metric's values measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Plain numbers
    #[default]
    Default,
    /// Durations in milliseconds
    Time,
    /// Sizes in bytes
    Data,
}

/// Relation of a sub-metric to the metric it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubMetric {
    pub parent: String,
    pub suffix: String,
}

impl SubMetric {
    /// Parse a `parent{tag:value}` style name into its parts.
    ///
    /// Returns None when the name has no braced suffix.
    pub fn parse(name: &str) -> Option<Self> {
        let open = name.find('{')?;
        let inner = name[open + 1..].strip_suffix('}')?;
        let parent = name[..open].trim();
        let suffix = inner.trim();
        if parent.is_empty() || suffix.is_empty() {
            return None;
        }
        Some(SubMetric { parent: parent.to_string(), suffix: suffix.to_string() })
    }
}

/// A named metric with its aggregated values.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Metric {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub contains: ValueType,

    pub sink: Sink,

    /// Threshold judgment: None = no threshold, Some(true) = failed, Some(false) = passed
    #[serde(default)]
    pub tainted: Option<bool>,

    #[serde(default)]
    pub sub: Option<SubMetric>,
}

impl Metric {
    pub fn new(name: &str, contains: ValueType, sink: Sink) -> Self {
        Metric { name: name.to_string(), contains, sink, tainted: None, sub: SubMetric::parse(name) }
    }

    pub fn with_tainted(mut self, tainted: bool) -> Self {
        self.tainted = Some(tainted);
        self
    }

    pub fn is_sub_metric(&self) -> bool {
        self.sub.is_some()
    }
}

/// Finalized aggregation of one metric's samples.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Sink {
    Counter(CounterSink),
    Gauge(GaugeSink),
    Rate(RateSink),
    Trend(TrendSink),
    /// A sink kind this renderer has nothing to show for
    #[serde(other)]
    Unknown,
}

impl Sink {
    /// Bring derived statistics up to date. Safe to call any number of times.
    pub fn calc(&mut self) {
        if let Sink::Trend(trend) = self {
            trend.calc();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct CounterSink {
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct GaugeSink {
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct RateSink {
    pub trues: u64,
    pub total: u64,
}

impl RateSink {
    pub fn fails(&self) -> u64 {
        self.total.saturating_sub(self.trues)
    }
}

/// Distribution of samples with derived statistics.
///
/// Only `values` is serialized; everything else is recomputed by `calc()`.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct TrendSink {
    values: Vec<f64>,

    #[serde(skip)]
    sorted: bool,
    #[serde(skip)]
    pub count: usize,
    #[serde(skip)]
    pub min: f64,
    #[serde(skip)]
    pub max: f64,
    #[serde(skip)]
    pub sum: f64,
    #[serde(skip)]
    pub avg: f64,
    #[serde(skip)]
    pub med: f64,
}

impl TrendSink {
    pub fn from_values(values: Vec<f64>) -> Self {
        let mut sink = TrendSink { values, ..Default::default() };
        sink.calc();
        sink
    }

    /// Samples, sorted ascending once `calc()` has run
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn add(&mut self, value: f64) {
        self.values.push(value);
        self.sorted = false;
    }

    pub fn calc(&mut self) {
        if !self.sorted {
            self.values.sort_by(|a, b| a.total_cmp(b));
            self.sorted = true;
        }

        self.count = self.values.len();
        self.sum = self.values.iter().sum();
        self.min = self.values.first().copied().unwrap_or(0.0);
        self.max = self.values.last().copied().unwrap_or(0.0);

        if self.count == 0 {
            self.avg = 0.0;
            self.med = 0.0;
            return;
        }

        self.avg = self.sum / self.count as f64;
        let mid = self.count / 2;
        self.med = if self.count % 2 == 0 { (self.values[mid - 1] + self.values[mid]) / 2.0 } else { self.values[mid] };
    }

    /// Value at the given percentile (as a fraction, 0.95 for p(95)).
    ///
    /// Interpolates linearly between the two closest ranks.
    /// Expects `calc()` to have run since the last `add()`.
    pub fn p(&self, pct: f64) -> f64 {
        match self.values.len() {
            0 => 0.0,
            1 => self.values[0],
            n => {
                let last = n - 1;
                let rank = pct.clamp(0.0, 1.0) * last as f64;
                let lower = (rank.floor() as usize).min(last);
                let upper = (rank.ceil() as usize).min(last);
                let frac = rank - rank.floor();
                let (j, k) = (self.values[lower], self.values[upper]);
                j + (k - j) * frac
            }
        }
    }
}
