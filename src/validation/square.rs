use super::board_validation::{is_on_board, BOARD_SIZE};
use super::distance_error::DistanceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A square on the 8x8 board, stored as `(x, y)` with both axes in `0..=7`.
///
/// A `Square` can only be built through [`Square::new`] (or the equivalent
/// `TryFrom` / serde paths), so every value that exists is on the board.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "(i16, i16)", into = "(u8, u8)")]
pub struct Square {
    x: u8,
    y: u8,
}

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

    /// Builds a square, rejecting coordinates outside the board.
    pub fn new(x: i16, y: i16) -> Result<Self, DistanceError> {
        if !is_on_board(x, y) {
            return Err(DistanceError::OutOfRange { x, y });
        }
        Ok(Self {
            x: x as u8,
            y: y as u8,
        })
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    /// Dense index in `0..64`, rank-major (`y * 8 + x`).
    pub fn index(self) -> usize {
        usize::from(self.y) * usize::from(BOARD_SIZE) + usize::from(self.x)
    }

    /// Inverse of [`Square::index`]. Returns `None` for indices past the board.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= Self::COUNT {
            return None;
        }
        let size = usize::from(BOARD_SIZE);
        Some(Self {
            x: (index % size) as u8,
            y: (index / size) as u8,
        })
    }

    /// Applies a move offset, returning `None` if the result leaves the board.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x: i16 = i16::from(self.x) + i16::from(dx);
        let y: i16 = i16::from(self.y) + i16::from(dy);
        Self::new(x, y).ok()
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT).filter_map(Self::from_index)
    }

    /// Colour class of the square: squares with equal parity share a colour.
    pub fn color_parity(self) -> u8 {
        (self.x + self.y) % 2
    }
}

impl TryFrom<(i16, i16)> for Square {
    type Error = DistanceError;

    fn try_from((x, y): (i16, i16)) -> Result<Self, Self::Error> {
        Self::new(x, y)
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> Self {
        (square.x, square.y)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Square::new(7, 7).is_ok());
        assert_eq!(
            Square::new(8, 0),
            Err(DistanceError::OutOfRange { x: 8, y: 0 })
        );
        assert_eq!(
            Square::new(0, -1),
            Err(DistanceError::OutOfRange { x: 0, y: -1 })
        );
    }

    #[test]
    fn test_index_covers_board_once() {
        let indices: Vec<usize> = Square::all().map(Square::index).collect();
        assert_eq!(indices, (0..64).collect::<Vec<_>>());
        assert_eq!(Square::from_index(64), None);
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.offset(1, 2), Some(Square::new(1, 2).unwrap()));
        assert_eq!(corner.offset(-1, 2), None);
        assert_eq!(corner.offset(0, -1), None);
    }

    #[test]
    fn test_color_parity() {
        assert_eq!(Square::new(0, 0).unwrap().color_parity(), 0);
        assert_eq!(Square::new(2, 7).unwrap().color_parity(), 1);
        assert_eq!(Square::new(3, 5).unwrap().color_parity(), 0);
    }

    #[test]
    fn test_serde_round_trip_and_rejection() {
        let square = Square::new(4, 6).unwrap();
        let json = serde_json::to_string(&square).unwrap();
        assert_eq!(json, "[4,6]");
        assert_eq!(serde_json::from_str::<Square>("[4,6]").unwrap(), square);
        assert!(serde_json::from_str::<Square>("[4,9]").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::new(4, 6).unwrap().to_string(), "(4,6)");
    }
}
