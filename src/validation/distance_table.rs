use super::min_moves::{min_moves, Distance};
use super::pieces::PieceKind;
use super::square::Square;
use rayon::prelude::*;
use tracing::debug;

/// Distances between every pair of squares for one piece.
///
/// Rows are indexed by the start square and columns by the goal square, both
/// using [`Square::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    piece: PieceKind,
    rows: Vec<[Distance; Square::COUNT]>,
}

impl DistanceTable {
    /// Computes the full table. Each start square is an independent job, so
    /// the rows are filled in parallel.
    pub fn build(piece: PieceKind) -> Self {
        let rows: Vec<[Distance; Square::COUNT]> = Square::all()
            .collect::<Vec<Square>>()
            .into_par_iter()
            .map(|start: Square| {
                let mut row: [Distance; Square::COUNT] = [Distance::Unreachable; Square::COUNT];
                for goal in Square::all() {
                    row[goal.index()] = min_moves(piece, start, goal);
                }
                row
            })
            .collect();

        debug!(%piece, rows = rows.len(), "built distance table");
        Self { piece, rows }
    }

    pub fn piece(&self) -> PieceKind {
        self.piece
    }

    pub fn get(&self, start: Square, goal: Square) -> Distance {
        self.rows[start.index()][goal.index()]
    }

    /// Distances from `start` to every square, in index order.
    pub fn row(&self, start: Square) -> &[Distance; Square::COUNT] {
        &self.rows[start.index()]
    }

    /// Largest finite distance from `start` to any square.
    pub fn max_moves_from(&self, start: Square) -> u8 {
        self.row(start)
            .iter()
            .filter_map(|d: &Distance| d.moves())
            .max()
            .unwrap_or(0)
    }
}
