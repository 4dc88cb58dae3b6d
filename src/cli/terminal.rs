//! Terminal capability detection and output helpers.

use owo_colors::{OwoColorize, colors::css};

/// Detects whether colored output should be enabled.
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// A horizontal rule sized to the terminal, capped at 70 columns.
pub fn rule() -> String {
    let width = terminal_size::terminal_size()
        .map_or(70, |(width, _)| usize::from(width.0).min(70));
    "─".repeat(width)
}

/// Extension trait for colorizing output.
pub trait Colorize {
    /// Color as warning (amber)
    fn warning(&self) -> String;
    /// Dim the text
    fn dim(&self) -> String;
}

impl Colorize for str {
    fn warning(&self) -> String {
        if supports_color() {
            self.fg::<css::Orange>().to_string()
        } else {
            self.to_string()
        }
    }

    fn dim(&self) -> String {
        if supports_color() {
            self.dimmed().to_string()
        } else {
            self.to_string()
        }
    }
}

impl Colorize for String {
    fn warning(&self) -> String {
        self.as_str().warning()
    }

    fn dim(&self) -> String {
        self.as_str().dim()
    }
}
