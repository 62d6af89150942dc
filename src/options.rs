use std::io::IsTerminal;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use clap::ValueHint;
use regex::Regex;

#[derive(Parser, Debug)]
#[clap(
    author = clap::crate_authors!(),
    version = clap::crate_version!(),
    about = clap::crate_description!(),
)]
pub struct Options {
    /// Additional word list file(s) to load into the dictionary, one or more words per line.
    #[clap(value_name = "file", value_hint = ValueHint::FilePath)]
    pub words: Vec<PathBuf>,

    /// Split the lines of word list files at the given regex pattern.
    /// For example, -d',' reads comma-separated words.
    /// [default: whitespace]
    #[clap(short, long, value_name = "regex", default_value = r"\s+", hide_default_value = true)]
    pub delimiter: Regex,

    /// Do not load the built-in dictionary. [default: false]
    #[clap(short = 'n', long)]
    pub no_defaults: bool,

    /// When to use colors in the output.
    /// [default: auto, i.e., only if stdout is a terminal and NO_COLOR is not set]
    #[clap(long, value_name = "a[uto]|y|always|n|never", default_value = "auto", hide_default_value = true)]
    pub color: ColorChoice,

    /// Do not show how long loading and searching took, e.g., for reproducible output.
    /// [default: false]
    #[clap(long)]
    pub no_timing: bool,

    /// Log more details to stderr, repeat for even more. RUST_LOG overrides this.
    /// [default: warnings only]
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Options {
    /// Default directive for the log filter.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
        }
    }
}

impl FromStr for ColorChoice {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" | "auto" => Ok(ColorChoice::Auto),
            "y" | "always" => Ok(ColorChoice::Always),
            "n" | "never" => Ok(ColorChoice::Never),
            _ => Err("color must be one of 'auto', 'always', or 'never'"),
        }
    }
}
