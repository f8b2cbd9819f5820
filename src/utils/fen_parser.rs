//! FEN-to-GameState parser.
//!
//! Builds a fully-populated position from a Forsyth-Edwards Notation string:
//! board, king squares, rights, en-passant target and the half-move clock,
//! with the history stacks seeded so the first undo has something to restore.
//! The full-move field is validated but not stored; export derives it from the
//! move log instead.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;
    let halfmove_part = parts.next().ok_or("Missing halfmove clock in FEN")?;
    let fullmove_part = parts.next().ok_or("Missing fullmove number in FEN")?;

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_target = parse_en_passant_square(en_passant_part)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid halfmove clock: {halfmove_part}"))?;
    fullmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid fullmove number: {fullmove_part}"))?;

    game_state.halfmove_clock_history = vec![game_state.halfmove_clock];
    game_state.castling_rights_log = vec![game_state.castling_rights];

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    let mut kings_found = [false; 2];

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            if col >= 8 {
                return Err("Board rank has too many files".to_owned());
            }

            let square = Square::new(row as u8, col as u8);
            game_state.set_piece(square, Some(piece));
            if piece.kind == PieceKind::King {
                if kings_found[piece.color.index()] {
                    return Err("FEN has more than one king for a side".to_owned());
                }
                kings_found[piece.color.index()] = true;
                game_state.king_squares[piece.color.index()] = square;
            }
            col += 1;
        }

        if col != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    if kings_found != [true, true] {
        return Err("FEN must contain one king per side".to_owned());
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, String> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.kingside[Color::Light.index()] = true,
            'Q' => rights.queenside[Color::Light.index()] = true,
            'k' => rights.kingside[Color::Dark.index()] = true,
            'q' => rights.queenside[Color::Dark.index()] = true,
            _ => return Err(format!("Invalid castling rights character: {ch}")),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, String> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant_part)?))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{CastlingRights, Color, Square};
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&game_state));

        assert_eq!(game_state.side_to_move, Color::Light);
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(game_state.castling_rights, CastlingRights::ALL);
        assert_eq!(game_state.castling_rights_log, vec![CastlingRights::ALL]);
    }

    #[test]
    fn parse_tracks_kings_clock_and_en_passant() {
        let game_state =
            parse_fen("4k3/8/8/3pP3/8/8/8/6K1 w - d6 12 40").expect("custom FEN should parse");
        assert_eq!(game_state.king_squares, [Square::new(7, 6), Square::new(0, 4)]);
        assert_eq!(game_state.en_passant_target, Some(Square::new(2, 3)));
        assert_eq!(game_state.halfmove_clock, 12);
        assert_eq!(game_state.halfmove_clock_history, vec![12]);
        assert_eq!(game_state.castling_rights, CastlingRights::NONE);
    }

    #[test]
    fn rejects_malformed_descriptions() {
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - - 0 1").is_err(), "no kings");
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w KX - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K4 w - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - - zero 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - -").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra").is_err());
    }
}
