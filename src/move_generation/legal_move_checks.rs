//! Pin and check detection for the side to move.
//!
//! Rays are cast outward from the king. Along each ray the first allied piece
//! is a pin candidate; a second allied piece kills the ray. A matching enemy
//! slider reached through zero allied pieces is a checker, through exactly one
//! it pins that piece. Knights, the enemy king and pawns are tested by offset
//! and can only check.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{
    DIAGONAL_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL_DIRECTIONS,
};

/// An allied piece that may only move along `direction` (king-outward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    pub direction: Direction,
}

/// An enemy piece giving check. `direction` points from the king toward it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checker {
    pub square: Square,
    pub kind: PieceKind,
    pub direction: Direction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttackReport {
    pub pinned: Vec<Pin>,
    pub checkers: Vec<Checker>,
    pub in_check: bool,
}

/// Analyse the king of the side to move.
pub fn pins_and_checks(game_state: &GameState) -> AttackReport {
    let color = game_state.side_to_move;
    let king = game_state.king_square(color);
    let mut report = AttackReport::default();

    scan_rays(game_state, king, color, &ORTHOGONAL_DIRECTIONS, PieceKind::Rook, &mut report);
    scan_rays(game_state, king, color, &DIAGONAL_DIRECTIONS, PieceKind::Bishop, &mut report);

    scan_offsets(game_state, king, color, &KNIGHT_OFFSETS, PieceKind::Knight, &mut report);
    scan_offsets(game_state, king, color, &KING_OFFSETS, PieceKind::King, &mut report);

    let forward = color.pawn_direction();
    scan_offsets(
        game_state,
        king,
        color,
        &[(forward, -1), (forward, 1)],
        PieceKind::Pawn,
        &mut report,
    );

    report.in_check = !report.checkers.is_empty();
    report
}

/// Whether the side to move has its king attacked right now.
#[inline]
pub fn is_side_to_move_in_check(game_state: &GameState) -> bool {
    pins_and_checks(game_state).in_check
}

fn scan_rays(
    game_state: &GameState,
    king: Square,
    color: Color,
    directions: &[Direction],
    slider: PieceKind,
    report: &mut AttackReport,
) {
    for &direction in directions {
        let mut candidate: Option<Square> = None;
        for step in 1..8 {
            let Some(square) = king.offset(direction, step) else {
                break;
            };
            let Some(piece) = game_state.piece_at(square) else {
                continue;
            };

            if piece.color == color {
                if candidate.is_some() {
                    break;
                }
                candidate = Some(square);
                continue;
            }

            if piece.kind == slider || piece.kind == PieceKind::Queen {
                match candidate {
                    Some(pinned) => report.pinned.push(Pin {
                        square: pinned,
                        direction,
                    }),
                    None => report.checkers.push(Checker {
                        square,
                        kind: piece.kind,
                        direction,
                    }),
                }
            }
            break;
        }
    }
}

fn scan_offsets(
    game_state: &GameState,
    king: Square,
    color: Color,
    offsets: &[Direction],
    attacker: PieceKind,
    report: &mut AttackReport,
) {
    for &offset in offsets {
        let Some(square) = king.offset(offset, 1) else {
            continue;
        };
        if game_state.piece_at(square) == Some(Piece::new(color.opposite(), attacker)) {
            report.checkers.push(Checker {
                square,
                kind: attacker,
                direction: offset,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{pins_and_checks, Pin};
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn start_position_has_no_pins_or_checks() {
        let report = pins_and_checks(&GameState::new_game());
        assert!(report.pinned.is_empty());
        assert!(report.checkers.is_empty());
        assert!(!report.in_check);
    }

    #[test]
    fn bishop_pins_knight_against_king() {
        let game = GameState::from_fen("4k3/8/8/b7/8/2N5/8/4K3 w - - 0 1").expect("FEN should parse");
        let report = pins_and_checks(&game);
        assert_eq!(
            report.pinned,
            vec![Pin {
                square: algebraic_to_square("c3").expect("c3"),
                direction: (-1, -1),
            }]
        );
        assert!(!report.in_check);
    }

    #[test]
    fn two_allied_pieces_block_the_ray() {
        let game = GameState::from_fen("4k3/4r3/8/8/4N3/4P3/8/4K3 w - - 0 1").expect("FEN should parse");
        let report = pins_and_checks(&game);
        assert!(report.pinned.is_empty());
        assert!(!report.in_check);
    }

    #[test]
    fn non_matching_enemy_ends_the_ray() {
        // Rook on a diagonal neither pins nor checks.
        let game = GameState::from_fen("4k3/8/8/r7/8/2N5/8/4K3 w - - 0 1").expect("FEN should parse");
        let report = pins_and_checks(&game);
        assert!(report.pinned.is_empty());
        assert!(!report.in_check);
    }

    #[test]
    fn double_check_from_knight_and_rook() {
        let game = GameState::from_fen("4r1k1/8/8/8/8/3n4/8/4K3 w - - 0 1").expect("FEN should parse");
        let report = pins_and_checks(&game);
        assert!(report.in_check);
        assert_eq!(report.checkers.len(), 2);
        let kinds: Vec<PieceKind> = report.checkers.iter().map(|c| c.kind).collect();
        assert!(kinds.contains(&PieceKind::Rook));
        assert!(kinds.contains(&PieceKind::Knight));
    }

    #[test]
    fn pawn_checks_only_diagonally_forward() {
        let checked = GameState::from_fen("4k3/8/8/8/8/3p4/4K3/8 w - - 0 1").expect("FEN should parse");
        let report = pins_and_checks(&checked);
        assert_eq!(report.checkers.len(), 1);
        assert_eq!(report.checkers[0].kind, PieceKind::Pawn);

        let behind = GameState::from_fen("4k3/8/8/8/8/8/4K3/3p4 w - - 0 1").expect("FEN should parse");
        assert!(!pins_and_checks(&behind).in_check);
    }
}
