/*
* Author: Renier Barnard
*/
use crate::validation::board_validation::BOARD_SIZE;
use crate::validation::min_moves::Distance;
use crate::validation::square::Square;
use std::collections::VecDeque;
use tracing::trace;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Returns all squares a knight can jump to from a given square on an empty board.
///
/// The knight moves in an L-shape (two squares in one direction, then one
/// square to the side). Candidates that land off the board are dropped.
///
/// # Arguments
///
/// * `from` - The square the knight stands on.
///
/// # Returns
///
/// The squares reachable in a single knight move.
pub fn get_possible_moves(from: Square) -> Vec<Square> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(dx, dy): &(i8, i8)| from.offset(dx, dy))
        .collect()
}

/// Minimum number of knight moves from `start` to `goal`, found by breadth-first search.
///
/// Squares are marked visited when they are queued, so each square enters the
/// queue at most once and the search touches at most 64 squares.
pub fn distance(start: Square, goal: Square) -> Distance {
    let mut visited: [[bool; BOARD_SIZE as usize]; BOARD_SIZE as usize] =
        [[false; BOARD_SIZE as usize]; BOARD_SIZE as usize];
    let mut queue: VecDeque<(Square, u8)> = VecDeque::new();

    visited[start.x() as usize][start.y() as usize] = true;
    queue.push_back((start, 0));

    while let Some((current, moves)) = queue.pop_front() {
        if current == goal {
            trace!(%start, %goal, moves, "knight search reached goal");
            return Distance::Moves(moves);
        }
        for next in get_possible_moves(current) {
            let seen: &mut bool = &mut visited[next.x() as usize][next.y() as usize];
            if *seen {
                continue;
            }
            *seen = true;
            queue.push_back((next, moves + 1));
        }
    }

    trace!(%start, %goal, "knight search exhausted the board");
    Distance::Unreachable
}
