use super::distance_error::DistanceError;
use super::pieces::{bishop, king, knight, PieceKind};
use super::square::Square;
use std::fmt;
use tracing::{debug, instrument};

/// Outcome of a distance query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distance {
    /// The goal is reachable in this many moves.
    Moves(u8),
    /// No sequence of moves connects the two squares.
    Unreachable,
}

impl Distance {
    pub fn moves(self) -> Option<u8> {
        match self {
            Distance::Moves(n) => Some(n),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Moves(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Moves(n) => write!(f, "{n}"),
            Distance::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Minimum number of moves for `piece` to travel from `start` to `goal` on an empty board.
pub fn min_moves(piece: PieceKind, start: Square, goal: Square) -> Distance {
    if start == goal {
        return Distance::Moves(0);
    }
    match piece {
        PieceKind::King => Distance::Moves(king::distance(start, goal)),
        PieceKind::Knight => knight::distance(start, goal),
        PieceKind::Bishop => bishop::distance(start, goal),
    }
}

/// Looks up the piece by name (case-insensitive) and computes its distance.
///
/// # Errors
///
/// Returns [`DistanceError::UnsupportedPiece`] if `piece` is not king, knight
/// or bishop.
#[instrument(level = "debug", skip_all, fields(piece = piece.trim(), %start, %goal))]
pub fn compute_distance(piece: &str, start: Square, goal: Square) -> Result<Distance, DistanceError> {
    let kind: PieceKind = PieceKind::parse(piece)?;
    let distance: Distance = min_moves(kind, start, goal);
    debug!(%distance, "computed distance");
    Ok(distance)
}
