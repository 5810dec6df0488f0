//! Group and check rendering.
//!
//! Walks the group tree depth first. Each named group prints a header
//! and indents everything below it by two spaces; the anonymous root
//! prints nothing of its own. Checks come before subgroups, both in
//! the order they were recorded.

use crate::console_format::{DETAILS_PREFIX, FAIL_MARK, GROUP_PREFIX, Mark, Palette, SUCC_MARK};
use crate::types::{Check, Group};

/// Indentation added per group level.
pub const GROUP_INDENT: &str = "  ";

/// Render a check line, plus a detail line when any evaluation failed.
pub fn format_check(indent: &str, check: &Check, palette: &Palette) -> String {
    let mark = if check.passed() { Mark::Pass } else { Mark::Fail };
    let role = mark.role();

    let mut output = format!("{}{}\n", indent, palette.paint(role, &format!("{} {}", mark.as_str(), check.name)));
    if !check.passed() {
        let details = format!(
            " {}  {}% — {} {} / {} {}",
            DETAILS_PREFIX,
            check.pass_percent(),
            SUCC_MARK,
            check.passes,
            FAIL_MARK,
            check.fails
        );
        output.push_str(&format!("{}{}\n", indent, palette.paint(role, &details)));
    }
    output
}

/// Render a group, its checks and all nested groups.
pub fn format_group(indent: &str, group: &Group, palette: &Palette) -> String {
    let mut output = String::new();
    write_group(&mut output, indent, group, palette);
    output
}

fn write_group(output: &mut String, indent: &str, group: &Group, palette: &Palette) {
    let mut indent = indent.to_string();
    if !group.is_anonymous() {
        output.push_str(&format!("{}{} {}\n\n", indent, GROUP_PREFIX, group.name));
        indent.push_str(GROUP_INDENT);
    }

    for check in &group.checks {
        output.push_str(&format_check(&indent, check, palette));
    }
    if !group.checks.is_empty() {
        output.push('\n');
    }

    for sub in &group.groups {
        write_group(output, &indent, sub, palette);
    }
}
