//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern"));

/// Round to 2 decimals (tonnes are reported to the hundredth).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn tonnes(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn strip_ansi(s: &str) -> String {
    ANSI_ESCAPE.replace_all(s, "").into_owned()
}

/// Terminal columns taken by `s`, ignoring colour escapes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Right-pad to `width` visible columns; coloured text keeps its escapes.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_matches_report_precision() {
        assert_eq!(round2(44.410000000000004), 44.41);
        assert_eq!(round2(7.456), 7.46);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(tonnes(0.0), "0.00");
        assert_eq!(tonnes(19.59), "19.59");
    }

    #[test]
    fn padding_ignores_colour_codes() {
        let coloured = "\x1b[32mloaded\x1b[0m";
        assert_eq!(visible_width(coloured), 6);
        assert_eq!(strip_ansi(&pad_right(coloured, 9)), "loaded   ");
        assert_eq!(pad_right("toolongvalue", 4), "toolongvalue");
    }
}
