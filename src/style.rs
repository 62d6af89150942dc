//! ANSI styling for the interactive shell. The trie knows nothing about any of this.

use std::fmt::Display;

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Banner,
    Heading,
    Label,
    Key,
    Prompt,
    Success,
    Error,
    Info,
    Dim,
    Highlight,
}

impl Style {
    /// The escape sequence(s) to start this style.
    fn codes(self) -> &'static str {
        match self {
            Style::Banner => "\x1b[1m\x1b[36m",
            Style::Heading => "\x1b[1m\x1b[35m",
            Style::Label => "\x1b[36m",
            Style::Key => "\x1b[1m\x1b[36m",
            Style::Prompt => "\x1b[33m",
            Style::Success => "\x1b[32m",
            Style::Error => "\x1b[31m",
            Style::Info => "\x1b[34m",
            Style::Dim => "\x1b[2m",
            Style::Highlight => "\x1b[1m\x1b[32m",
        }
    }
}

/// Renders text either with ANSI escape sequences or as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, style: Style, text: impl Display) -> String {
        if self.enabled {
            format!("{}{text}{}", style.codes(), RESET)
        } else {
            text.to_string()
        }
    }
}

#[test]
fn paint() {
    assert_eq!(Palette::new(false).paint(Style::Error, "oops"), "oops");
    assert_eq!(Palette::new(true).paint(Style::Error, "oops"), "\x1b[31moops\x1b[0m");
    assert_eq!(Palette::new(true).paint(Style::Key, 3), "\x1b[1m\x1b[36m3\x1b[0m");
}
