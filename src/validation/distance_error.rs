use derive_more::{Display, Error};

/// Failures reported by the distance core.
///
/// An unreachable goal is not an error; it is reported as
/// [`Distance::Unreachable`](super::min_moves::Distance::Unreachable).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum DistanceError {
    /// The piece name is not one of king, knight or bishop.
    #[display("unsupported piece '{piece}', expected one of king, knight or bishop")]
    UnsupportedPiece { piece: String },

    /// A coordinate lies outside `0..=7`.
    #[display("square ({x},{y}) is off the board, both values must be in [0,7]")]
    OutOfRange { x: i16, y: i16 },
}
