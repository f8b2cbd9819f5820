//! GameState-to-FEN export.
//!
//! The en-passant field is always written as `-`, even when the position was
//! imported with a target square, and the full-move field is derived from the
//! number of moves played since import.

use crate::game_state::{chess_types::*, game_state::GameState};

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(&game_state.board);
    let side_to_move = match game_state.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights);
    let fullmove_number = (game_state.move_log.len() + 1) / 2;

    format!(
        "{} {} {} - {} {}",
        board, side_to_move, castling, game_state.halfmove_clock, fullmove_number
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for (row, cells) in board.iter().enumerate() {
        let mut empty_count = 0u8;

        for cell in cells {
            match cell {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if rights.kingside[Color::Light.index()] {
        out.push('K');
    }
    if rights.queenside[Color::Light.index()] {
        out.push('Q');
    }
    if rights.kingside[Color::Dark.index()] {
        out.push('k');
    }
    if rights.queenside[Color::Dark.index()] {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn starting_position_board_castling_and_clock_round_trip() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let generated = generate_fen(&parsed);

        // Full-move number is derived from the empty move log.
        assert_eq!(
            generated,
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0"
        );

        let reparsed = parse_fen(&generated).expect("generated FEN should parse");
        assert_eq!(reparsed.board, parsed.board);
        assert_eq!(reparsed.side_to_move, parsed.side_to_move);
        assert_eq!(reparsed.castling_rights, parsed.castling_rights);
        assert_eq!(reparsed.halfmove_clock, parsed.halfmove_clock);
    }

    #[test]
    fn en_passant_target_is_accepted_but_never_exported() {
        let fen = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1";
        let parsed = parse_fen(fen).expect("FEN should parse");
        assert!(parsed.en_passant_target.is_some());
        assert_eq!(generate_fen(&parsed), "4k3/8/8/3pP3/8/8/8/4K3 w - - 0 0");
    }

    #[test]
    fn fullmove_number_follows_move_count() {
        let mut game = GameState::new_game();
        for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3")] {
            game.try_move(
                algebraic_to_square(from).expect("square"),
                algebraic_to_square(to).expect("square"),
            )
            .expect("opening move should be legal");
        }
        assert_eq!(
            game.get_fen(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
        );
    }
}
