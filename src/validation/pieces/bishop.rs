/*
Author: Renier Barnard
*/
use crate::validation::min_moves::Distance;
use crate::validation::square::Square;

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Calculates all squares a bishop can slide to from a given square on an empty board.
///
/// The bishop travels along each of its four diagonals until it reaches the
/// edge of the board. Nothing blocks it since the board holds no other pieces.
///
/// # Arguments
///
/// * `from` - The square the bishop stands on.
///
/// # Returns
///
/// The squares reachable in a single bishop move.
pub fn get_possible_moves(from: Square) -> Vec<Square> {
    BISHOP_DIRECTIONS
        .iter()
        .flat_map(|&(dx, dy): &(i8, i8)| slide(from, dx, dy))
        .collect()
}

/// Walks one diagonal ray from `from`, excluding the starting square.
fn slide(from: Square, dx: i8, dy: i8) -> Vec<Square> {
    let mut positions: Vec<Square> = Vec::new();
    let mut current: Square = from;
    while let Some(next) = current.offset(dx, dy) {
        positions.push(next);
        current = next;
    }
    positions
}

/// Minimum number of bishop moves from `start` to `goal`.
///
/// A bishop never changes square colour, so squares of opposite colour are
/// unreachable. Squares sharing a diagonal take one move, and any other
/// same-coloured square takes two. `start == goal` is answered by the caller.
pub fn distance(start: Square, goal: Square) -> Distance {
    if start.color_parity() != goal.color_parity() {
        return Distance::Unreachable;
    }
    if start.x().abs_diff(goal.x()) == start.y().abs_diff(goal.y()) {
        return Distance::Moves(1);
    }
    Distance::Moves(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(x: i16, y: i16) -> Square {
        Square::new(x, y).unwrap()
    }

    #[test]
    fn test_bishop_moves_center() {
        // d4 style square: 7 + 6 diagonal squares
        assert_eq!(get_possible_moves(sq(3, 3)).len(), 13);
    }

    #[test]
    fn test_bishop_moves_corner() {
        let moves = get_possible_moves(sq(0, 0));
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|m| m.x() == m.y()));
    }

    #[test]
    fn test_bishop_moves_keep_colour() {
        let from = sq(2, 5);
        for to in get_possible_moves(from) {
            assert_eq!(to.color_parity(), from.color_parity());
        }
    }

    #[test]
    fn test_bishop_distance_known_values() {
        assert_eq!(distance(sq(0, 0), sq(2, 7)), Distance::Unreachable);
        assert_eq!(distance(sq(0, 0), sq(2, 2)), Distance::Moves(1));
        // (3,2) sits on the opposite colour to (0,0)
        assert_eq!(distance(sq(0, 0), sq(3, 2)), Distance::Unreachable);
        assert_eq!(distance(sq(0, 0), sq(3, 1)), Distance::Moves(2));
        assert_eq!(distance(sq(0, 0), sq(4, 2)), Distance::Moves(2));
        assert_eq!(distance(sq(7, 0), sq(0, 7)), Distance::Moves(1));
    }

    #[test]
    fn test_bishop_one_move_matches_generator() {
        let from = sq(5, 2);
        let moves = get_possible_moves(from);
        for to in Square::all().filter(|&to| to != from) {
            let expected = if moves.contains(&to) {
                Distance::Moves(1)
            } else if to.color_parity() == from.color_parity() {
                Distance::Moves(2)
            } else {
                Distance::Unreachable
            };
            assert_eq!(distance(from, to), expected, "{from} -> {to}");
        }
    }
}
