// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `wordgrid`: search a letter grid file for candidate words.
//!
//! ```bash
//! wordgrid --grid puzzle.txt cold wind snow chill
//! wordgrid --grid puzzle.txt --words-file words.txt --counts --limit 5
//! ```

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use std::fs;
use std::path::{Path, PathBuf};
use word_grid_search::logging::init_logger;
use word_grid_search::{FinderConfig, WordFinder};

#[derive(Parser, Debug)]
#[command(name = "wordgrid")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with one grid row per line (blank lines are ignored)
    #[arg(short, long)]
    grid: PathBuf,

    /// File with one candidate word per line
    #[arg(short, long)]
    words_file: Option<PathBuf>,

    /// Maximum number of words to print
    #[arg(short, long, default_value = "10")]
    limit: usize,

    /// Print each word's count next to it
    #[arg(short, long)]
    counts: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Candidate words
    words: Vec<String>,
}

impl Args {
    fn finder_config(&self) -> FinderConfig {
        FinderConfig::default().with_result_limit(self.limit)
    }

    /// Positional words followed by the words file, if any.
    fn candidate_words(&self) -> Result<Vec<String>> {
        let mut words = self.words.clone();
        if let Some(path) = &self.words_file {
            words.extend(read_lines(path)?);
        }
        Ok(words)
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect())
}

fn build_finder(args: &Args) -> Result<WordFinder> {
    let rows = read_lines(&args.grid)?;
    WordFinder::with_config(&rows, args.finder_config())
        .with_context(|| format!("invalid grid in {}", args.grid.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level: LevelFilter = args
        .log_level
        .parse()
        .map_err(|_| anyhow!("unknown log level {:?}", args.log_level))?;
    init_logger(level);

    let finder = build_finder(&args)?;
    let words = args.candidate_words()?;
    info!("Searching {0}x{0} grid for {1} words", finder.size(), words.len());

    for found in finder.find_counts(&words) {
        if args.counts {
            println!("{}\t{}", found.word, found.count);
        } else {
            println!("{}", found.word);
        }
    }

    Ok(())
}
