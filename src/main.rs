use std::io;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::options::Options;
use crate::shell::Shell;
use crate::style::Palette;
use crate::trie::PrefixIndex;

mod dictionary;
mod options;
mod shell;
mod style;
mod unicode_bar;

pub mod trie;

fn main() -> anyhow::Result<()> {
    let options = Options::parse();
    init_logging(&options);
    tracing::debug!(?options);

    // Seed the index with the built-in dictionary and any word lists given on the command line.
    let start = Instant::now();
    let mut index = PrefixIndex::new();
    if !options.no_defaults {
        index.extend(dictionary::DEFAULT_WORDS);
    }
    for path in &options.words {
        let words = dictionary::load_file(path, &options.delimiter)?;
        let before = index.count();
        index.extend(&words);
        info!(path = %path.display(), read = words.len(), added = index.count() - before, "loaded word list");
    }
    let load_time = start.elapsed();
    info!(words = index.count(), nodes = index.node_count(), ?load_time, "dictionary ready");

    let palette = Palette::new(options.color.enabled());
    let mut shell = Shell::new(index, io::stdin().lock(), io::stdout().lock(), palette, !options.no_timing);
    shell.greet(load_time).context("cannot write to stdout")?;
    shell.run().context("interactive session failed")?;

    let index = shell.into_index();
    info!(words = index.count(), "session ended");
    Ok(())
}

/// Logs to stderr, so it does not mix with the interactive output.
fn init_logging(options: &Options) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.log_level()));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
