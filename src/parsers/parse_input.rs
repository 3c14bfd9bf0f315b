use super::notation::parse_square;
use super::parse_error::ParseError;
use crate::validation::pieces::PieceKind;
use crate::validation::square::Square;
use serde::{Deserialize, Serialize};
use std::io::BufRead;

#[derive(Serialize, Deserialize, Debug)]
struct JsonInput {
    pub reason: String,
    #[serde(default)]
    pub piece: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
}

/// A decoded request from the JSON-lines protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonIn {
    Ping,
    Exit,
    /// Minimum moves between two squares. `piece` keeps the caller's spelling
    /// for the reply and is checked when the request is answered.
    Distance {
        piece: String,
        start: Square,
        goal: Square,
    },
    /// Distances from `start` to every square.
    Table { piece: PieceKind, start: Square },
}

/// Reads one line from `input`.
///
/// Returns `Ok(None)` once the input is exhausted.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, ParseError> {
    let mut line: String = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Decodes a single request line.
pub fn parse_request(line: &str) -> Result<JsonIn, ParseError> {
    let input: JsonInput = serde_json::from_str(line)?;

    match input.reason.as_str() {
        "ping" => Ok(JsonIn::Ping),
        "exit" => Ok(JsonIn::Exit),
        "distance" => Ok(JsonIn::Distance {
            piece: required(input.piece, "piece")?,
            start: parse_square(&required(input.start, "start")?)?,
            goal: parse_square(&required(input.goal, "goal")?)?,
        }),
        "table" => Ok(JsonIn::Table {
            piece: PieceKind::parse(&required(input.piece, "piece")?)?,
            start: parse_square(&required(input.start, "start")?)?,
        }),
        _ => Err(ParseError::UnknownReason {
            reason: input.reason,
        }),
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ParseError> {
    value.ok_or(ParseError::MissingField { field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::distance_error::DistanceError;
    use std::io::Cursor;

    #[test]
    fn test_parse_distance_request() {
        let request =
            parse_request(r#"{"reason":"distance","piece":"King","start":"(0,0)","goal":"e7"}"#)
                .unwrap();
        assert_eq!(
            request,
            JsonIn::Distance {
                piece: "King".to_string(),
                start: Square::new(0, 0).unwrap(),
                goal: Square::new(4, 6).unwrap(),
            }
        );
    }

    #[test]
    fn test_parse_control_requests() {
        assert_eq!(parse_request(r#"{"reason":"ping"}"#).unwrap(), JsonIn::Ping);
        assert_eq!(parse_request(r#"{"reason":"exit"}"#).unwrap(), JsonIn::Exit);
    }

    #[test]
    fn test_parse_table_request_validates_piece() {
        assert_eq!(
            parse_request(r#"{"reason":"table","piece":"knight","start":"(1,1)"}"#).unwrap(),
            JsonIn::Table {
                piece: PieceKind::Knight,
                start: Square::new(1, 1).unwrap(),
            }
        );
        assert!(matches!(
            parse_request(r#"{"reason":"table","piece":"rook","start":"(1,1)"}"#),
            Err(ParseError::Distance(DistanceError::UnsupportedPiece { .. }))
        ));
    }

    #[test]
    fn test_parse_request_errors() {
        assert!(matches!(parse_request("not json"), Err(ParseError::Json(_))));
        assert!(matches!(
            parse_request(r#"{"reason":"dance"}"#),
            Err(ParseError::UnknownReason { .. })
        ));
        assert!(matches!(
            parse_request(r#"{"reason":"distance","piece":"king","start":"(0,0)"}"#),
            Err(ParseError::MissingField { field: "goal" })
        ));
        assert!(matches!(
            parse_request(r#"{"reason":"distance","piece":"king","start":"(0,0)","goal":"(0,8)"}"#),
            Err(ParseError::Distance(DistanceError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_read_line_until_end() {
        let mut input = Cursor::new("first\nsecond");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("first\n"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("second"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }
}
