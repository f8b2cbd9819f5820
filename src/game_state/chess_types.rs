//! Core value types shared by the rules engine and search.
//!
//! Board coordinates follow the mailbox convention used everywhere in the crate:
//! `row 0` is rank 8 (the dark back rank) and `col 0` is the a-file.

pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// `+1` for light, `-1` for dark. Scores are light-relative before this is applied.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Upper-case letter used by notation and position descriptions.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Position-description letter: upper case for light, lower case for dark.
    pub fn fen_char(self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::Light => letter,
            Color::Dark => letter.to_ascii_lowercase(),
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_letter(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else {
            Color::Dark
        };
        Some(Self { color, kind })
    }
}

/// Ray or offset step as `(row delta, col delta)`.
pub type Direction = (i8, i8);

/// A board coordinate. Always on the board once constructed through [`Square::new`]
/// or [`Square::offset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Step by `steps` multiples of `direction`, or `None` off the board.
    #[inline]
    pub fn offset(self, direction: Direction, steps: i8) -> Option<Square> {
        let row = self.row as i8 + direction.0 * steps;
        let col = self.col as i8 + direction.1 * steps;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

/// 8x8 mailbox, indexed `[row][col]`.
pub type Board = [[Option<Piece>; 8]; 8];

pub const EMPTY_BOARD: Board = [[None; 8]; 8];

/// The four castling booleans, indexed by [`Color::index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub kingside: [bool; 2],
    pub queenside: [bool; 2],
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights {
        kingside: [false; 2],
        queenside: [false; 2],
    };

    pub const ALL: CastlingRights = CastlingRights {
        kingside: [true; 2],
        queenside: [true; 2],
    };

    #[inline]
    pub fn revoke_all(&mut self, color: Color) {
        self.kingside[color.index()] = false;
        self.queenside[color.index()] = false;
    }
}
