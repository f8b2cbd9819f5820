//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! row/column squares where row 0 is rank 8.

use crate::game_state::chess_types::Square;

#[inline]
pub fn file_char(col: u8) -> char {
    char::from(b'a' + col)
}

#[inline]
pub fn rank_char(row: u8) -> char {
    char::from(b'8' - row)
}

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    format!("{}{}", file_char(square.col), rank_char(square.row))
}

/// Split a coordinate move such as `e2e4` into its two squares.
pub fn parse_square_pair(text: &str) -> Result<(Square, Square), String> {
    let text = text.trim();
    if text.len() != 4 || !text.is_ascii() {
        return Err(format!("Expected a move like e2e4, got: {text}"));
    }
    Ok((algebraic_to_square(&text[0..2])?, algebraic_to_square(&text[2..4])?))
}
