/// Author: Renier Barnard
pub mod bishop;
pub mod king;
pub mod knight;

use super::distance_error::DistanceError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// The pieces whose travel distance does not depend on board occupancy.
///
/// Names parse case-insensitively (`"KNIGHT"`, `"Knight"` and `"knight"` are
/// the same piece) and display in lowercase.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Knight,
    Bishop,
}

impl PieceKind {
    /// Parses a user supplied piece name, ignoring surrounding whitespace.
    pub fn parse(name: &str) -> Result<Self, DistanceError> {
        PieceKind::from_str(name.trim()).map_err(|_| DistanceError::UnsupportedPiece {
            piece: name.trim().to_string(),
        })
    }
}
