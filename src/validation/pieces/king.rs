/*
* Author: Renier Barnard
*/
use crate::validation::square::Square;

const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Calculates all squares a king can step to from a given square on an empty board.
///
/// The king moves one square in any direction (horizontally, vertically, or
/// diagonally). Destinations that would leave the board are dropped.
///
/// # Arguments
///
/// * `from` - The square the king stands on.
///
/// # Returns
///
/// The squares reachable in a single king move.
pub fn get_possible_moves(from: Square) -> Vec<Square> {
    KING_OFFSETS
        .iter()
        .filter_map(|&(dx, dy): &(i8, i8)| from.offset(dx, dy))
        .collect()
}

/// Minimum number of king moves from `start` to `goal`.
///
/// One diagonal step closes a gap on both axes at once, so the count is the
/// larger of the two axis gaps (Chebyshev distance). Every square reaches
/// every other square.
pub fn distance(start: Square, goal: Square) -> u8 {
    let dx: u8 = start.x().abs_diff(goal.x());
    let dy: u8 = start.y().abs_diff(goal.y());
    dx.max(dy)
}
