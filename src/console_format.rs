/// Console formatting module - Pure rendering concerns
///
/// This module handles the low-level pieces the summary renderer builds on:
/// - Display width of strings that carry ANSI escape sequences
/// - Right padding to a column width
/// - Semantic color roles and their SGR escape codes
/// - Pass/fail marks
///
/// It never writes to a stream itself; the report module decides what goes where.

use term::color::Color;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::canonical_combining_class;

pub const SUCC_MARK: &str = "✓";
pub const FAIL_MARK: &str = "✗";
pub const GROUP_PREFIX: &str = "█";
pub const DETAILS_PREFIX: &str = "↳";

//
// Text Width
//

/// Count the display width of a string, skipping ANSI escape sequences.
///
/// The string is decomposed with NFKD and every decomposed unit counts as one
/// column; combining marks stay attached to their base character. This is an
/// approximation: wide CJK characters and emoji count as a single column.
///
/// Escape handling:
/// - `ESC [` starts a CSI sequence, terminated by a byte in `0x40..=0x7E`
/// - `ESC` followed by anything else is a short sequence, terminated by a byte in `0x40..=0x5F`
///
/// An unterminated sequence swallows the rest of the string.
pub fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_esc = false;
    let mut in_long_esc = false;

    // Combining marks attach to the element before them; a leading run of
    // marks counts as one column on its own.
    let mut attached = false;

    for c in s.nfkd() {
        if c == '\x1b' {
            in_esc = true;
            attached = true;
            continue;
        }
        if in_esc {
            let code = c as u32;
            if c == '[' {
                in_long_esc = true;
            } else if in_long_esc && (0x40..=0x7E).contains(&code) {
                in_esc = false;
                in_long_esc = false;
            } else if !in_long_esc && (0x40..=0x5F).contains(&code) {
                in_esc = false;
            }
            continue;
        }
        if canonical_combining_class(c) != 0 {
            if !attached {
                attached = true;
                width += 1;
            }
            continue;
        }

        attached = true;
        width += 1;
    }

    width
}

/// Spaces needed to pad `s` out to `width` columns (never negative).
pub fn padding_for(s: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(display_width(s)))
}

/// Pad string with trailing spaces up to the given display width.
pub fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, padding_for(s, width))
}

//
// Colors
//

/// Semantic role of a piece of summary text.
///
/// The renderer only decides which role applies; the palette decides
/// whether and how it is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    /// Passed checks and thresholds
    Success,
    /// Failed checks and thresholds
    Failure,
    /// No judgment, printed as-is
    Standard,
    /// Primary metric values
    Value,
    /// Secondary annotations (rates, min/max, pass/fail counts)
    Extra,
    /// Dot leaders and other filler
    Gray,
}

impl ColorRole {
    fn color(&self) -> Option<Color> {
        match self {
            ColorRole::Success => Some(term::color::GREEN),
            ColorRole::Failure => Some(term::color::RED),
            ColorRole::Standard => None,
            ColorRole::Value | ColorRole::Extra => Some(term::color::CYAN),
            ColorRole::Gray => Some(term::color::BRIGHT_BLACK),
        }
    }

    /// SGR parameters for this role, e.g. `"32"` or `"36;2"`.
    fn sgr(&self) -> Option<String> {
        let code = fg_code(self.color()?);
        match self {
            ColorRole::Extra => Some(format!("{};2", code)),
            _ => Some(code.to_string()),
        }
    }
}

/// Map a terminal color number to its SGR foreground code.
fn fg_code(color: Color) -> u32 {
    if color < 8 { 30 + color } else { 90 + (color - 8) }
}

/// Applies color roles to text, or passes text through when colors are off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    use_colors: bool,
}

impl Palette {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Palette that never emits escape sequences
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn use_colors(&self) -> bool {
        self.use_colors
    }

    /// Wrap text in the escape sequence for a role
    pub fn paint(&self, role: ColorRole, text: &str) -> String {
        if !self.use_colors || text.is_empty() {
            return text.to_string();
        }
        match role.sgr() {
            Some(sgr) => format!("\x1b[{}m{}\x1b[0m", sgr, text),
            None => text.to_string(),
        }
    }
}

//
// Marks
//

/// Pass/fail mark shown in front of checks and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Passed: ✓
    Pass,
    /// Failed: ✗
    Fail,
    /// No pass/fail judgment: a blank
    Neutral,
}

impl Mark {
    /// Mark for an optional pass/fail judgment where `Some(true)` means tainted.
    pub fn from_tainted(tainted: Option<bool>) -> Self {
        match tainted {
            None => Mark::Neutral,
            Some(true) => Mark::Fail,
            Some(false) => Mark::Pass,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::Pass => SUCC_MARK,
            Mark::Fail => FAIL_MARK,
            Mark::Neutral => " ",
        }
    }

    pub fn role(&self) -> ColorRole {
        match self {
            Mark::Pass => ColorRole::Success,
            Mark::Fail => ColorRole::Failure,
            Mark::Neutral => ColorRole::Standard,
        }
    }
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
