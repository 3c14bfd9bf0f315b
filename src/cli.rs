//! Command-line interface for chess_moves.

use crate::parsers::notation::parse_square;
use crate::parsers::parse_error::ParseError;
use crate::parsers::parse_output::{result_message, TableOut};
use crate::session::{run_interactive, run_json};
use crate::validation::distance_table::DistanceTable;
use crate::validation::min_moves::compute_distance;
use crate::validation::pieces::PieceKind;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Chess Moves - minimum moves for a king, knight or bishop on an empty board
#[derive(Parser, Debug)]
#[command(name = "chess_moves")]
#[command(about = "Minimum number of moves between two squares for a king, knight or bishop", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log verbosity: 0 off, 1 error, 2 warning, 3 info, 4 debug, 5 trace.
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, default_value_t = 0)]
    pub verbose: u8,

    /// Subcommand to run; defaults to the interactive prompt
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ask for the piece and squares on the terminal
    Interactive,

    /// Answer JSON requests read line by line from stdin
    Json,

    /// Print the minimum number of moves between two squares
    Distance {
        /// king, knight or bishop (any case)
        piece: String,

        /// Starting square, as (x,y) or e.g. a1
        start: String,

        /// Target square, as (x,y) or e.g. h8
        goal: String,
    },

    /// Print the distances from one square to every square as an 8x8 grid
    Table {
        /// king, knight or bishop (any case)
        piece: String,

        /// Square to measure from, as (x,y) or e.g. a1
        #[arg(default_value = "(0,0)")]
        start: String,
    },
}

/// Maps the `--verbose` level onto a tracing filter directive.
pub fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "off",
        1 => "error",
        2 => "warn",
        3 => "info",
        4 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Logs go to stderr so stdout stays clean
/// for replies.
pub fn init_tracing(verbose: u8) {
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs one command. Replies are written to `out`; the prompt and JSON
/// sessions read from stdin, and JSON request errors go to stderr.
pub fn run<W: Write>(command: Command, out: &mut W) -> Result<(), ParseError> {
    match command {
        Command::Interactive => run_interactive(&mut io::stdin().lock(), out).map(|_| ()),
        Command::Json => run_json(&mut io::stdin().lock(), out, &mut io::stderr()),
        Command::Distance { piece, start, goal } => distance(&piece, &start, &goal, out),
        Command::Table { piece, start } => table(&piece, &start, out),
    }
}

fn distance<W: Write>(piece: &str, start: &str, goal: &str, out: &mut W) -> Result<(), ParseError> {
    let start = parse_square(start)?;
    let goal = parse_square(goal)?;
    let distance = compute_distance(piece, start, goal)?;
    writeln!(out, "{}", result_message(piece.trim(), distance))?;
    Ok(())
}

fn table<W: Write>(piece: &str, start: &str, out: &mut W) -> Result<(), ParseError> {
    let piece = PieceKind::parse(piece)?;
    let start = parse_square(start)?;
    let table = DistanceTable::build(piece);
    write!(out, "{}", TableOut::new(&table, start))?;
    Ok(())
}
