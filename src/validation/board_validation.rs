// Author: Renier Barnard

/// Number of files and ranks on the board.
pub const BOARD_SIZE: u8 = 8;

/// Returns `true` when both coordinates lie on the 8x8 board.
///
/// Coordinates are taken as signed values so that candidates produced by
/// applying a move offset (which may step off the edge) can be checked
/// before they are narrowed into a [`Square`](super::square::Square).
///
/// # Arguments
///
/// * `x` - The candidate file, 0-indexed.
/// * `y` - The candidate rank, 0-indexed.
pub fn is_on_board(x: i16, y: i16) -> bool {
    let bounds = 0..i16::from(BOARD_SIZE);
    bounds.contains(&x) && bounds.contains(&y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_are_on_board() {
        assert!(is_on_board(0, 0));
        assert!(is_on_board(0, 7));
        assert!(is_on_board(7, 0));
        assert!(is_on_board(7, 7));
    }

    #[test]
    fn test_rejects_each_axis_independently() {
        assert!(!is_on_board(-1, 3));
        assert!(!is_on_board(3, -1));
        assert!(!is_on_board(8, 3));
        assert!(!is_on_board(3, 8));
        assert!(!is_on_board(-2, 9));
    }

    #[test]
    fn test_whole_board_is_exactly_64_squares() {
        let count = (-3i16..11)
            .flat_map(|x| (-3i16..11).map(move |y| (x, y)))
            .filter(|&(x, y)| is_on_board(x, y))
            .count();
        assert_eq!(count, 64);
    }
}
