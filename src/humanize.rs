/// Value humanization for the summary
///
/// Turns raw metric numbers into display strings. The choice of format
/// depends on the metric's sink (rates are percentages) and on what its
/// values contain (durations, byte sizes, or plain numbers).

use crate::metrics::{Metric, Sink, ValueType};

const NANOS_PER_MICRO: i128 = 1_000;
const NANOS_PER_MILLI: i128 = 1_000_000;
const NANOS_PER_SEC: i128 = 1_000_000_000;
const NANOS_PER_MIN: i128 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MIN;

impl Metric {
    /// Format a value of this metric for display.
    ///
    /// `time_unit` (`"s"`, `"ms"`, `"us"`) fixes the unit for time metrics;
    /// without one, durations pick their own unit.
    pub fn humanize_value(&self, value: f64, time_unit: Option<&str>) -> String {
        if let Sink::Rate(_) = self.sink {
            return humanize_percent(value);
        }
        match self.contains {
            ValueType::Data => humanize_bytes(value),
            ValueType::Time => humanize_time(value, time_unit),
            ValueType::Default => humanize_float(value),
        }
    }
}

/// Fraction as a percentage, truncated to two decimals: 0.12345 -> "12.34%"
pub fn humanize_percent(fraction: f64) -> String {
    let truncated = (fraction * 100.0 * 100.0).trunc() / 100.0;
    format!("{:.2}%", truncated)
}

/// Plain number with trailing zeros removed: 10.0 -> "10", 0.25 -> "0.25"
pub fn humanize_float(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{:.6}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Byte count in SI units: 999 -> "999 B", 1234 -> "1.2 kB"
pub fn humanize_bytes(bytes: f64) -> String {
    const UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

    let bytes = if bytes.is_finite() { bytes.max(0.0).trunc() } else { 0.0 };
    if bytes < 10.0 {
        return format!("{} B", bytes);
    }

    let exp = ((bytes.ln() / 1000f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let scaled = (bytes / 1000f64.powi(exp as i32) * 10.0 + 0.5).floor() / 10.0;
    if scaled < 10.0 {
        format!("{:.1} {}", scaled, UNITS[exp])
    } else {
        format!("{:.0} {}", scaled, UNITS[exp])
    }
}

/// Milliseconds as a duration, either in a fixed unit or self-scaling.
pub fn humanize_time(millis: f64, time_unit: Option<&str>) -> String {
    match time_unit {
        Some("s") => format!("{:.2}s", millis / 1000.0),
        Some("ms") => format!("{:.2}ms", millis),
        Some("us") | Some("µs") => format!("{:.2}µs", millis * 1000.0),
        _ => humanize_duration(millis),
    }
}

/// Self-scaling duration with precision reduced for readability:
/// minutes and above keep whole seconds, seconds keep hundredths,
/// milli- and microseconds keep two decimals.
pub fn humanize_duration(millis: f64) -> String {
    if !millis.is_finite() {
        return millis.to_string();
    }
    let mut nanos = (millis * NANOS_PER_MILLI as f64).round() as i128;
    let magnitude = nanos.abs();
    let precision = if magnitude > NANOS_PER_MIN {
        NANOS_PER_SEC
    } else if magnitude > NANOS_PER_SEC {
        10 * NANOS_PER_MILLI
    } else if magnitude > NANOS_PER_MILLI {
        10 * NANOS_PER_MICRO
    } else if magnitude > NANOS_PER_MICRO {
        10
    } else {
        1
    };
    nanos -= nanos % precision;
    format_duration(nanos)
}

/// Format nanoseconds the compact way: "1h2m3.5s", "250ms", "12.5µs", "0s".
pub fn format_duration(nanos: i128) -> String {
    if nanos == 0 {
        return "0s".to_string();
    }
    let sign = if nanos < 0 { "-" } else { "" };
    let n = nanos.abs();

    if n < NANOS_PER_MICRO {
        return format!("{}{}ns", sign, n);
    }
    if n < NANOS_PER_MILLI {
        return format!("{}{}µs", sign, with_fraction(n, NANOS_PER_MICRO));
    }
    if n < NANOS_PER_SEC {
        return format!("{}{}ms", sign, with_fraction(n, NANOS_PER_MILLI));
    }

    let hours = n / NANOS_PER_HOUR;
    let minutes = (n % NANOS_PER_HOUR) / NANOS_PER_MIN;
    let seconds = with_fraction(n % NANOS_PER_MIN, NANOS_PER_SEC);

    let mut out = String::from(sign);
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    out.push_str(&format!("{}s", seconds));
    out
}

/// `n / unit` with the remainder as trimmed decimal digits: (1500, 1000) -> "1.5"
fn with_fraction(n: i128, unit: i128) -> String {
    let whole = n / unit;
    let rem = n % unit;
    if rem == 0 {
        return whole.to_string();
    }
    let digits = unit.to_string().len() - 1;
    let frac = format!("{:0width$}", rem, width = digits);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}
