/// Tests for trend column configuration

#[cfg(test)]
mod tests {
    use crate::metrics::TrendSink;
    use crate::trend::*;

    #[test]
    fn test_default_columns_order() {
        let columns = TrendColumns::default();
        assert_eq!(columns.keys(), vec!["avg", "min", "med", "max", "p(90)", "p(95)"]);
    }

    #[test]
    fn test_verify() {
        let columns = TrendColumns::default();
        assert_eq!(columns.verify(""), Err(TrendStatError::EmptyStat));
        assert_eq!(columns.verify("p(95)"), Ok(()));
        assert_eq!(columns.verify("p(99.9)"), Ok(()));
        assert_eq!(columns.verify("p(95"), Err(TrendStatError::UnknownFormat));
        assert_eq!(columns.verify("q(95)"), Err(TrendStatError::UnknownFormat));
        assert_eq!(columns.verify("p(abc)"), Err(TrendStatError::InvalidPercentileValue));
        assert_eq!(columns.verify("p()"), Err(TrendStatError::InvalidPercentileValue));
        assert_eq!(columns.verify("avg"), Ok(()));
        assert_eq!(columns.verify("bogus"), Err(TrendStatError::UnknownFormat));
    }

    #[test]
    fn test_parse_percentile() {
        assert_eq!(parse_percentile("p(95)"), Ok(0.95));
        assert_eq!(parse_percentile("p(50)"), Ok(0.5));
        assert_eq!(parse_percentile(""), Err(TrendStatError::EmptyStat));
        assert_eq!(parse_percentile("p("), Err(TrendStatError::UnknownFormat));
        assert_eq!(parse_percentile("avg"), Err(TrendStatError::UnknownFormat));
    }

    #[test]
    fn test_update_keeps_order_and_drops_unknown() {
        let mut columns = TrendColumns::default();
        columns.update(&["p(99)", "bogus", "avg"]);
        assert_eq!(columns.keys(), vec!["p(99)", "avg"]);
        assert_eq!(columns.iter().next().map(|c| c.stat), Some(TrendStat::Percentile(0.99)));
    }

    #[test]
    fn test_update_all_invalid_is_noop() {
        let mut columns = TrendColumns::default();
        columns.update(&["bogus"]);
        assert_eq!(columns, TrendColumns::default());

        let empty: [&str; 0] = [];
        columns.update(&empty);
        assert_eq!(columns, TrendColumns::default());
    }

    #[test]
    fn test_update_resolves_against_current_columns() {
        let mut columns = TrendColumns::default();
        columns.update(&["max"]);
        assert_eq!(columns.keys(), vec!["max"]);

        // "avg" is no longer a current column, so only the percentile survives
        columns.update(&["avg", "p(90)"]);
        assert_eq!(columns.keys(), vec!["p(90)"]);
    }

    #[test]
    fn test_update_accepts_owned_strings() {
        let mut columns = TrendColumns::default();
        let stats = vec!["min".to_string(), "p(99.9)".to_string()];
        columns.update(&stats);
        assert_eq!(columns.to_string(), "min,p(99.9)");
    }

    #[test]
    fn test_column_values() {
        let sink = TrendSink::from_values(vec![10.0, 20.0, 30.0, 40.0, 50.0]);
        let columns = TrendColumns::default();
        let values: Vec<f64> = columns.iter().map(|c| c.get(&sink)).collect();
        assert_eq!(values[..4], [30.0, 10.0, 30.0, 50.0]);
        assert!((values[4] - 46.0).abs() < 1e-9);
        assert!((values[5] - 48.0).abs() < 1e-9);
    }
}
