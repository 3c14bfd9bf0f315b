//! The two front ends that feed the distance core: a prompt-and-reprompt
//! dialogue for people and a JSON-lines loop for programs.

use crate::parsers::notation::parse_square;
use crate::parsers::parse_error::ParseError;
use crate::parsers::parse_input::{parse_request, read_line, JsonIn};
use crate::parsers::parse_output::{result_message, ParseOut, TableOut};
use crate::validation::distance_table::DistanceTable;
use crate::validation::min_moves::{compute_distance, Distance};
use crate::validation::pieces::PieceKind;
use crate::validation::square::Square;
use std::collections::HashMap;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

const WELCOME: &str = "\nWelcome to Chess Moves Calculator!\n";
const PIECE_PROMPT: &str =
    "What kind of piece do you have? (Please enter one of 'Bishop', 'King', or 'Knight'): ";
const PIECE_RETRY: &str = "\nInvalid piece. Please try again: ";
const START_PROMPT: &str = "\nWhat is your piece's starting position? (Please use the format (x,y)): ";
const START_RETRY: &str = "\nInvalid starting position. Please ensure the input is formatted correctly,\nand that both values are in [0,7]: ";
const GOAL_PROMPT: &str = "\nWhat is your piece's target position? (Please use the format (x,y)): ";
const GOAL_RETRY: &str = "\nInvalid target position. Please ensure the input is formatted correctly,\nand that both values are in [0,7]: ";

/// Asks for a piece, a start square and a goal square, then prints the answer.
///
/// Each question is repeated until the answer parses. Returns the computed
/// distance so callers can act on it.
pub fn run_interactive<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Distance, ParseError> {
    info!("starting interactive session");
    writeln!(out, "{WELCOME}")?;

    let piece: String = ask(input, out, PIECE_PROMPT, PIECE_RETRY, |text: &str| {
        PieceKind::parse(text)?;
        Ok(text.trim().to_string())
    })?;
    let start: Square = ask(input, out, START_PROMPT, START_RETRY, parse_square)?;
    let goal: Square = ask(input, out, GOAL_PROMPT, GOAL_RETRY, parse_square)?;

    let distance: Distance = compute_distance(&piece, start, goal)?;
    writeln!(out, "\n{}\n", result_message(&piece, distance))?;
    Ok(distance)
}

/// Prompts with `first`, then with `retry` until `parse` accepts a line.
fn ask<R, W, T, F>(input: &mut R, out: &mut W, first: &str, retry: &str, parse: F) -> Result<T, ParseError>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, ParseError>,
{
    let mut prompt: &str = first;
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;
        let line: String = read_line(input)?.ok_or(ParseError::EndOfInput)?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(e) => {
                warn!(input = line.trim(), error = %e, "rejected answer");
                prompt = retry;
            }
        }
    }
}

/// Serves JSON requests, one per line, until `exit` or end of input.
///
/// Replies go to `out`. A request that fails is reported as a JSON error on
/// `err` and the loop moves on to the next line.
pub fn run_json<R: BufRead, W: Write, E: Write>(input: &mut R, out: &mut W, err: &mut E) -> Result<(), ParseError> {
    info!("starting JSON session");
    let mut tables: HashMap<PieceKind, DistanceTable> = HashMap::new();

    while let Some(line) = read_line(input)? {
        if line.trim().is_empty() {
            continue;
        }
        let request: JsonIn = match parse_request(&line) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "rejected request");
                e.write_json(err)?;
                continue;
            }
        };
        debug!(?request, "handling request");

        match request {
            JsonIn::Exit => break,
            JsonIn::Ping => writeln!(out, "pong")?,
            JsonIn::Distance { piece, start, goal } => match compute_distance(&piece, start, goal) {
                Ok(distance) => writeln!(out, "{}", ParseOut::new(&piece, start, goal, distance).to_json())?,
                Err(e) => {
                    let e: ParseError = e.into();
                    warn!(error = %e, "rejected request");
                    e.write_json(err)?;
                }
            },
            JsonIn::Table { piece, start } => {
                let table: &DistanceTable = tables.entry(piece).or_insert_with(|| DistanceTable::build(piece));
                writeln!(out, "{}", TableOut::new(table, start).to_json())?;
            }
        }
        out.flush()?;
    }

    info!("JSON session finished");
    Ok(())
}
