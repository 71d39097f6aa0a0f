use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ct9::Trie;
use tracing::{debug, info, Level};

#[derive(Parser, Debug)]
#[command(name = "ct9")]
#[command(about = "Prefix tree autocomplete over a word list", long_about = None)]
struct Cli {
    /// Word list to load, one entry per line
    #[arg(short, long, value_name = "PATH")]
    words: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the stored words starting with a prefix
    Complete {
        /// Prefix to complete, empty for every word
        #[arg(default_value = "")]
        prefix: String,

        /// Maximum number of completions
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },
    /// Print a summary of the loaded trie
    Stats {
        /// Emit JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Read commands from stdin: `+text` inserts, `-word` deletes,
    /// `?prefix` lists completions, `#` prints stats, anything else
    /// shows the first completion
    Repl,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let mut trie = match &cli.words {
        Some(path) => load_words(path)?,
        None => Trie::new(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Complete { prefix, limit } => {
            let words = match limit {
                Some(limit) => trie.try_autocomplete(&prefix, limit)?,
                None => trie.autocomplete_all(&prefix),
            };
            for word in words {
                writeln!(out, "{word}")?;
            }
        }
        Commands::Stats { json } => {
            let stats = trie.stats();
            if json {
                serde_json::to_writer_pretty(&mut out, &stats)?;
                writeln!(out)?;
            } else {
                writeln!(out, "words:       {}", stats.words)?;
                writeln!(out, "nodes:       {}", stats.nodes)?;
                writeln!(out, "max depth:   {}", stats.max_depth)?;
                writeln!(out, "arena slots: {}", stats.arena_slots)?;
            }
        }
        Commands::Repl => repl(&mut trie, io::stdin().lock(), &mut out)?,
    }

    Ok(())
}

fn load_words(path: &Path) -> Result<Trie> {
    let start = Instant::now();
    let file = File::open(path).with_context(|| format!("failed to open word list {}", path.display()))?;

    let mut trie = Trie::new();
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("failed to read word list {}", path.display()))?;
        trie.insert(&line);
    }

    info!(
        path = %path.display(),
        words = trie.len(),
        nodes = trie.size(),
        elapsed = ?start.elapsed(),
        "loaded word list"
    );
    Ok(trie)
}

fn repl(trie: &mut Trie, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read stdin")?;
        debug!(command = %line, "repl");

        if let Some(text) = line.strip_prefix('+') {
            trie.insert(text);
        } else if let Some(word) = line.strip_prefix('-') {
            if !trie.del(word) {
                writeln!(out, "not found: {word}")?;
            }
        } else if let Some(prefix) = line.strip_prefix('?') {
            for word in trie.completions(prefix) {
                writeln!(out, "{word}")?;
            }
        } else if line == "#" {
            let stats = trie.stats();
            writeln!(out, "{} words, {} nodes", stats.words, stats.nodes)?;
        } else if let Some(word) = trie.completions(&line).next() {
            writeln!(out, "{word}")?;
        }
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(trie: &mut Trie, script: &str) -> String {
        let mut out = Vec::new();
        repl(trie, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_repl_session() {
        let mut trie = Trie::from("app apple bat");
        let output = run(&mut trie, "ap\n+application\n?appl\n-app\n-app\n#\nzz\n");
        assert_eq!(
            output,
            "app\napple\napplication\nnot found: app\n3 words, 15 nodes\n"
        );
    }

    #[test]
    fn test_load_words_missing_file() {
        let err = load_words(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("failed to open word list"));
    }

    #[test]
    fn test_cli_parses_negative_limit() {
        let cli = Cli::try_parse_from(["ct9", "complete", "ap", "--limit", "-2"]).unwrap();
        match cli.command {
            Commands::Complete { prefix, limit } => {
                assert_eq!(prefix, "ap");
                assert_eq!(limit, Some(-2));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
