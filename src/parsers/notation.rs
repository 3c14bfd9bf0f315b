// Author: Renier Barnard
use super::parse_error::ParseError;
use crate::validation::square::Square;

/// Parses a square written either as `(x,y)` or in chess notation (e.g. `"e4"`).
///
/// The tuple form takes exactly one digit per axis with no spaces, the way the
/// prompt asks for it. Chess notation maps the file `a`-`h` to `x` and the
/// rank `1`-`8` to `y`, so `"a1"` is `(0,0)` and `"h8"` is `(7,7)`.
/// Surrounding whitespace is ignored.
pub fn parse_square(text: &str) -> Result<Square, ParseError> {
    let text: &str = text.trim();
    let invalid = || ParseError::InvalidSquare {
        input: text.to_string(),
    };

    let chars: Vec<char> = text.chars().collect();
    match chars.as_slice() {
        ['(', x, ',', y, ')'] => {
            let x: u32 = x.to_digit(10).ok_or_else(invalid)?;
            let y: u32 = y.to_digit(10).ok_or_else(invalid)?;
            Ok(Square::new(x as i16, y as i16)?)
        }
        [_, _] => chess_notation_to_index(text).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

/// Converts a chess notation string (e.g. "e2") to a square (e.g. `(4,1)`).
pub fn chess_notation_to_index(notation: &str) -> Option<Square> {
    let mut chars = notation.chars();
    let file: char = chars.next()?.to_ascii_lowercase(); // Column (a-h)
    let rank: char = chars.next()?; // Row (1-8)
    if chars.next().is_some() {
        return None;
    }

    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }

    let x: i16 = i16::from(file as u8 - b'a');
    let y: i16 = i16::from(rank as u8 - b'1');
    Square::new(x, y).ok()
}

pub fn index_to_chess_notation(square: Square) -> String {
    format!(
        "{}{}",
        (b'a' + square.x()) as char,
        (b'1' + square.y()) as char
    )
}
