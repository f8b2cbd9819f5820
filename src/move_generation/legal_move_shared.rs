use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];
pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];
pub const KING_OFFSETS: [Direction; 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Walk each ray until the board edge, an own piece (excluded), or an enemy piece (included).
pub fn push_slider_moves(
    board: &Board,
    from: Square,
    mover: Piece,
    directions: &[Direction],
    out: &mut Vec<Move>,
) {
    for &direction in directions {
        for step in 1..8 {
            let Some(to) = from.offset(direction, step) else {
                break;
            };
            match board[to.row as usize][to.col as usize] {
                None => out.push(Move::new(board, from, to, mover)),
                Some(piece) if piece.color != mover.color => {
                    out.push(Move::new(board, from, to, mover));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}

/// Single-step offsets whose destination does not hold an allied piece.
pub fn push_offset_moves(
    board: &Board,
    from: Square,
    mover: Piece,
    offsets: &[Direction],
    out: &mut Vec<Move>,
) {
    for &offset in offsets {
        let Some(to) = from.offset(offset, 1) else {
            continue;
        };
        let blocked = board[to.row as usize][to.col as usize]
            .is_some_and(|piece| piece.color == mover.color);
        if !blocked {
            out.push(Move::new(board, from, to, mover));
        }
    }
}
