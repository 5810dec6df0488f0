/// End-to-end checks of the public library API
use run_summary::{
    Check, CounterSink, Group, Metric, Palette, RateSink, Sink, SummaryInput, TrendColumns, TrendStatError, ValueType,
    display_width, report, summarize_to_string,
};
use std::time::Duration;

#[test]
fn test_width_ignores_color_codes() {
    assert_eq!(display_width("\x1b[31mhi\x1b[0m"), 2);
    assert_eq!(display_width(""), 0);

    let a = "\x1b[32m✓\x1b[0m checks";
    let b = "......: 99.00%";
    assert_eq!(display_width(&format!("{}{}", a, b)), display_width(a) + display_width(b));
}

#[test]
fn test_trend_stat_configuration() {
    let mut columns = TrendColumns::default();
    assert_eq!(columns.verify(""), Err(TrendStatError::EmptyStat));
    assert_eq!(columns.verify("p(95)"), Ok(()));
    assert_eq!(columns.verify("p(95"), Err(TrendStatError::UnknownFormat));
    assert_eq!(columns.verify("p(abc)"), Err(TrendStatError::InvalidPercentileValue));
    assert_eq!(columns.verify("avg"), Ok(()));

    columns.update(&["p(99)", "bogus", "avg"]);
    assert_eq!(columns.keys(), vec!["p(99)", "avg"]);

    columns.update(&["bogus"]);
    assert_eq!(columns.keys(), vec!["p(99)", "avg"]);
}

#[test]
fn test_counter_and_rate_values() {
    let counter = Metric::new("http_reqs", ValueType::Default, Sink::Counter(CounterSink { value: 100.0 }));
    let f = report::format_value(Duration::from_secs(10), None, &counter);
    assert_eq!(f.extras, vec![format!("{}/s", counter.humanize_value(10.0, None))]);

    let rate = Metric::new("checks", ValueType::Default, Sink::Rate(RateSink { trues: 3, total: 4 }));
    let f = report::format_value(Duration::from_secs(10), None, &rate);
    assert_eq!(f.value, rate.humanize_value(0.75, None));
    assert_eq!(f.extras.len(), 2);
    assert!(f.extras[0].ends_with(" 3"));
    assert!(f.extras[1].ends_with(" 1"));
}

#[test]
fn test_single_check_and_counter() {
    let mut root = Group::root();
    root.checks.push(Check { name: "status is 200".to_string(), passes: 5, fails: 0 });

    let mut input = SummaryInput::new(Duration::from_secs(1));
    input.root_group = Some(root);
    input.insert_metric(Metric::new("http_reqs", ValueType::Default, Sink::Counter(CounterSink { value: 10.0 })));

    let out = summarize_to_string("", &mut input, &TrendColumns::default(), Palette::new(true));
    let lines: Vec<&str> = out.lines().collect();

    // no group header, one success check line, blank separator, one metric line
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "    \x1b[32m✓ status is 200\x1b[0m");
    assert_eq!(lines[1], "");
    assert!(lines[2].contains("10/s"));
    // untainted metric carries no success color
    assert!(!lines[2].contains("\x1b[32m"));
}

#[test]
fn test_metrics_section_sorted() {
    let mut input = SummaryInput::new(Duration::from_secs(1));
    let names = ["vus", "checks", "http_reqs", "data_sent", "iterations", "b", "a"];
    for name in names {
        input.insert_metric(Metric::new(name, ValueType::Default, Sink::Counter(CounterSink { value: 1.0 })));
    }

    let out = summarize_to_string("", &mut input, &TrendColumns::default(), Palette::plain());
    let printed: Vec<String> =
        out.lines().map(|l| l.trim_start().split('.').next().unwrap_or_default().to_string()).collect();
    assert!(printed.windows(2).all(|w| w[0] < w[1]), "{:?}", printed);
    assert_eq!(printed.len(), names.len());
}
