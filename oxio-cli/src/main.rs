//! oxio CLI
//!
//! A small utility exercising the oxio buffered I/O library: stream files
//! line by line, count symbol occurrences, tally character classes, and
//! write lines through the unbuffered write path.

mod commands;

use clap::{Parser, Subcommand};
use commands::{cmd_cat, cmd_count, cmd_stats, cmd_write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxio")]
#[command(author, version, about = "Buffered file and console I/O utility")]
#[command(long_about = "
oxio streams files through a fixed 512-byte read-ahead buffer and writes
through an unbuffered, fail-fast byte sink.

Examples:
  oxio cat notes.txt
  oxio cat notes.txt --width 4096
  oxio count notes.txt --symbol e
  oxio count notes.txt --symbol e --limit 80
  oxio stats notes.txt --json
  oxio write out.txt 'first line' 'second line'
  oxio write log.txt --append 'another entry'
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a file line by line
    #[command(alias = "c")]
    Cat {
        /// File to print
        file: PathBuf,

        /// Line capacity; lines must fit in width - 2 bytes plus newline
        #[arg(short, long, default_value_t = 1024)]
        width: usize,
    },

    /// Count occurrences of a symbol
    Count {
        /// File to scan
        file: PathBuf,

        /// Symbol to count (single ASCII character)
        #[arg(short, long)]
        symbol: char,

        /// Examine at most this many bytes of each line
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Tally lines, bytes, and character classes
    #[command(alias = "s")]
    Stats {
        /// File to analyze
        file: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Write lines to a file
    #[command(alias = "w")]
    Write {
        /// Destination file
        file: PathBuf,

        /// Append instead of truncating
        #[arg(short, long)]
        append: bool,

        /// Lines to write
        lines: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cat { file, width } => cmd_cat(&file, width),
        Commands::Count {
            file,
            symbol,
            limit,
        } => cmd_count(&file, symbol, limit),
        Commands::Stats { file, json } => cmd_stats(&file, json),
        Commands::Write {
            file,
            append,
            lines,
        } => cmd_write(&file, append, &lines),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
