use crate::validation::distance_error::DistanceError;
use derive_more::{Display, Error, From};
use serde_json::{json, Value};
use std::io::{self, Write};

/// Everything that can go wrong between reading a request and answering it.
#[derive(Debug, Display, Error, From)]
pub enum ParseError {
    #[display("could not read input: {_0}")]
    Io(io::Error),

    #[display("invalid JSON request: {_0}")]
    Json(serde_json::Error),

    #[display("{_0}")]
    Distance(DistanceError),

    #[display("invalid square '{input}', expected (x,y) with x and y in [0,7] or a square like e4")]
    #[from(skip)]
    InvalidSquare { input: String },

    #[display("unknown request reason '{reason}'")]
    #[from(skip)]
    UnknownReason { reason: String },

    #[display("request is missing the '{field}' field")]
    #[from(skip)]
    MissingField { field: &'static str },

    #[display("input ended before a full request was read")]
    #[from(skip)]
    EndOfInput,
}

impl ParseError {
    pub fn to_json(&self) -> Value {
        json!({
            "error": self.to_string(),
        })
    }

    /// Writes the error as a single JSON line.
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.to_json())
    }

    pub fn print_stderr(&self) {
        eprintln!("{}", self.to_json());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let err = ParseError::InvalidSquare {
            input: "(9,9".to_string(),
        };
        assert_eq!(
            err.to_json(),
            json!({"error": "invalid square '(9,9', expected (x,y) with x and y in [0,7] or a square like e4"})
        );
    }

    #[test]
    fn test_distance_error_converts() {
        let err: ParseError = DistanceError::UnsupportedPiece {
            piece: "rook".to_string(),
        }
        .into();
        assert!(matches!(err, ParseError::Distance(_)));
        assert_eq!(
            err.to_string(),
            "unsupported piece 'rook', expected one of king, knight or bishop"
        );
    }

    #[test]
    fn test_write_json_is_one_line() {
        let mut out: Vec<u8> = Vec::new();
        ParseError::EndOfInput.write_json(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with('\n'));
    }
}
