//! Minimum move counts for a king, knight or bishop travelling between two
//! squares of an otherwise empty 8x8 board.
//!
//! ```
//! use chess_moves::{compute_distance, Distance, Square};
//!
//! let start = Square::new(0, 0).unwrap();
//! let goal = Square::new(7, 7).unwrap();
//! assert_eq!(compute_distance("knight", start, goal), Ok(Distance::Moves(6)));
//! ```

// Author: Renier Barnard
pub mod cli;
pub mod parsers;
pub mod session;
pub mod validation;

pub use parsers::parse_error::ParseError;
pub use validation::distance_error::DistanceError;
pub use validation::distance_table::DistanceTable;
pub use validation::min_moves::{compute_distance, min_moves, Distance};
pub use validation::pieces::PieceKind;
pub use validation::square::Square;
