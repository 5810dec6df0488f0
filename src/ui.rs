/// User interface and status output utilities
///
/// This module handles:
/// - Colored terminal text
/// - Error message formatting

use std::io::Write;

/// Print colored text to stderr, with fallback to plain text
fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        eprint!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        if let Some(ref mut t) = term::stderr() {
            if t.fg(fg).is_err() {
                return false;
            }
            let _ = t.attr(term::Attr::Bold);
            if write!(t, "{}", s).is_err() {
                return false;
            }
            let _ = t.reset();
            return true;
        }

        false
    }
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    eprintln!();
    print_color("error", term::color::BRIGHT_RED);
    eprintln!(": {}", msg);
    eprintln!();
}
