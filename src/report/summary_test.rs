/// Tests for the full summary output

#[cfg(test)]
mod tests {
    use crate::console_format::Palette;
    use crate::metrics::*;
    use crate::report::summary::*;
    use crate::trend::TrendColumns;
    use crate::types::{Check, Group, SummaryInput};
    use std::io::{self, Write};
    use std::time::Duration;

    fn single_check_input(tainted: Option<bool>) -> SummaryInput {
        let mut root = Group::root();
        root.checks.push(Check { name: "status is 200".to_string(), passes: 5, fails: 0 });

        let mut input = SummaryInput::new(Duration::from_secs(1));
        input.root_group = Some(root);
        let mut reqs = Metric::new("http_reqs", ValueType::Default, Sink::Counter(CounterSink { value: 10.0 }));
        reqs.tainted = tainted;
        input.insert_metric(reqs);
        input
    }

    #[test]
    fn test_end_to_end_plain() {
        let mut input = single_check_input(None);
        let out = summarize_to_string("", &mut input, &TrendColumns::default(), Palette::plain());
        assert_eq!(out, "    ✓ status is 200\n\n    http_reqs...: 10 10/s\n");
    }

    #[test]
    fn test_metric_mark_colored_only_when_passing() {
        let columns = TrendColumns::default();

        let out = summarize_to_string("", &mut single_check_input(Some(false)), &columns, Palette::new(true));
        let metric_line = out.lines().last().unwrap();
        assert!(metric_line.starts_with("  \x1b[32m✓\x1b[0m http_reqs"), "{:?}", metric_line);

        let out = summarize_to_string("", &mut single_check_input(None), &columns, Palette::new(true));
        let metric_line = out.lines().last().unwrap();
        assert!(metric_line.starts_with("    http_reqs"), "{:?}", metric_line);
        assert!(metric_line.contains("\x1b[36;2m10/s\x1b[0m"));

        let out = summarize_to_string("", &mut single_check_input(Some(true)), &columns, Palette::new(true));
        assert!(out.lines().last().unwrap().starts_with("  \x1b[31m✗\x1b[0m"));
    }

    #[test]
    fn test_base_indent_applies_to_both_sections() {
        let mut input = single_check_input(Some(false));
        let out = summarize_to_string(">", &mut input, &TrendColumns::default(), Palette::plain());
        assert_eq!(out, ">    ✓ status is 200\n\n>  ✓ http_reqs...: 10 10/s\n");
    }

    #[test]
    fn test_no_root_group() {
        let mut input = single_check_input(None);
        input.root_group = None;
        let out = summarize_to_string("", &mut input, &TrendColumns::default(), Palette::plain());
        assert_eq!(out, "    http_reqs...: 10 10/s\n");
    }

    #[test]
    fn test_metrics_sorted_regardless_of_insertion() {
        let names = ["zz", "mm", "aa", "http_reqs", "b", "data_sent", "vus_max", "iterations"];
        let mut input = SummaryInput::new(Duration::from_secs(1));
        for name in names {
            input.insert_metric(Metric::new(name, ValueType::Default, Sink::Counter(CounterSink { value: 1.0 })));
        }

        let out = summarize_to_string("", &mut input, &TrendColumns::default(), Palette::plain());
        let printed: Vec<&str> = out.lines().map(|l| l.trim_start().split('.').next().unwrap()).collect();
        let mut sorted = names.to_vec();
        sorted.sort();
        assert_eq!(printed, sorted);
    }

    #[test]
    fn test_rendering_twice_is_stable() {
        let mut input = SummaryInput::new(Duration::from_secs(2));
        let mut trend = TrendSink::default();
        for v in [120.0, 80.0, 100.0] {
            trend.add(v);
        }
        input.insert_metric(Metric::new("http_req_duration", ValueType::Time, Sink::Trend(trend)));

        let columns = TrendColumns::default();
        let first = summarize_to_string("", &mut input, &columns, Palette::plain());
        let second = summarize_to_string("", &mut input, &columns, Palette::plain());
        assert_eq!(first, second);
        assert!(first.contains("avg=100ms"), "{}", first);
        assert!(first.contains("min=80ms"), "{}", first);
        assert!(first.contains("max=120ms"), "{}", first);
    }

    #[test]
    fn test_summary_writer_into_inner() {
        let columns = TrendColumns::default();
        let mut writer = SummaryWriter::new(Vec::new(), Palette::plain(), &columns);
        writer.write_groups("", &Group::new("setup")).unwrap();
        assert_eq!(writer.into_inner(), "█ setup\n\n".as_bytes());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_errors_are_swallowed() {
        let mut input = single_check_input(Some(true));
        summarize(BrokenPipe, "", &mut input, &TrendColumns::default(), Palette::plain());
    }
}
