use super::notation::index_to_chess_notation;
use crate::validation::board_validation::BOARD_SIZE;
use crate::validation::distance_table::DistanceTable;
use crate::validation::min_moves::Distance;
use crate::validation::pieces::PieceKind;
use crate::validation::square::Square;
use serde_json::{json, Value};
use std::fmt;

/// The sentence shown to a person once a distance is known.
///
/// `piece` is echoed exactly as the user typed it.
pub fn result_message(piece: &str, distance: Distance) -> String {
    match distance {
        Distance::Moves(n) => format!("The {piece} can reach the target position in {n} moves!"),
        Distance::Unreachable => format!("The {piece} cannot reach the target position :("),
    }
}

/// Renders the distances from `start` as an 8x8 grid, rank 7 first.
///
/// Each cell holds the move count, or `.` where the square cannot be reached.
pub fn distance_grid(table: &DistanceTable, start: Square) -> Vec<String> {
    let row = table.row(start);
    (0..BOARD_SIZE)
        .rev()
        .map(|y: u8| {
            (0..BOARD_SIZE)
                .map(|x: u8| {
                    let index: usize = usize::from(y) * usize::from(BOARD_SIZE) + usize::from(x);
                    match row[index] {
                        Distance::Moves(n) => n.to_string(),
                        Distance::Unreachable => ".".to_string(),
                    }
                })
                .collect::<Vec<String>>()
                .join(" ")
        })
        .collect()
}

/// Reply to a `distance` request.
#[derive(Debug)]
pub struct ParseOut {
    message: String,
    piece: String,
    start: Square,
    goal: Square,
    distance: Distance,
}

impl ParseOut {
    pub fn new(piece: &str, start: Square, goal: Square, distance: Distance) -> Self {
        Self {
            message: result_message(piece, distance),
            piece: piece.to_string(),
            start,
            goal,
            distance,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "message": self.message,
            "piece": self.piece,
            "start": self.start.to_string(),
            "goal": self.goal.to_string(),
            "moves": self.distance.moves(),
            "reachable": self.distance.is_reachable(),
        })
    }
}

impl fmt::Display for ParseOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Reply to a `table` request.
#[derive(Debug)]
pub struct TableOut {
    piece: PieceKind,
    start: Square,
    grid: Vec<String>,
    max_moves: u8,
}

impl TableOut {
    pub fn new(table: &DistanceTable, start: Square) -> Self {
        Self {
            piece: table.piece(),
            start,
            grid: distance_grid(table, start),
            max_moves: table.max_moves_from(start),
        }
    }

    pub fn to_json(&self) -> Value {
        let piece: &'static str = self.piece.into();
        json!({
            "piece": piece,
            "start": self.start.to_string(),
            "grid": self.grid,
            "max_moves": self.max_moves,
        })
    }
}

impl fmt::Display for TableOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} distances from {} [{}]",
            self.piece,
            self.start,
            index_to_chess_notation(self.start)
        )?;
        for line in &self.grid {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "every reachable square is at most {} moves away", self.max_moves)
    }
}
