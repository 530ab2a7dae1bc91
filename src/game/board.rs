//! Mailbox board representation.

use std::fmt;

use super::types::{Color, Piece, Square};

/// An 8x8 grid of optional pieces, indexed `[rank][file]`.
///
/// Rank 0 is White's back rank. The board is a plain value: the owning
/// [`Game`](super::Game) replaces it wholesale on every accepted move, and
/// move generation only ever reads snapshots (cloning when a simulation
/// needs to mutate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// The standard initial arrangement.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Color::White, *piece);
            board.set_piece(Square(7, file), Color::Black, *piece);
            board.set_piece(Square(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }
        board
    }

    /// A board with no pieces on it.
    #[must_use]
    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The piece (color, kind) on `square`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        self.squares[square.0][square.1]
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_empty(&self, square: Square) -> bool {
        self.squares[square.0][square.1].is_none()
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, color: Color, piece: Piece) {
        self.squares[square.0][square.1] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn clear_square(&mut self, square: Square) {
        self.squares[square.0][square.1] = None;
    }

    /// Lift whatever is on `from` and drop it on `to`, replacing any
    /// occupant. No legality checking.
    pub(crate) fn move_unchecked(&mut self, from: Square, to: Square) {
        let piece = self.squares[from.0][from.1].take();
        self.squares[to.0][to.1] = piece;
    }

    /// Locate `color`'s king.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                if self.piece_at(sq) == Some((color, Piece::King)) {
                    return Some(sq);
                }
            }
        }
        None
    }

    /// Count the pieces of `color` on the board.
    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|cell| matches!(cell, Some((c, _)) if *c == color))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// ASCII rendering with rank 8 on top; uppercase = White.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let ch = match self.squares[rank][file] {
                    Some((Color::White, piece)) => piece.to_char().to_ascii_uppercase(),
                    Some((Color::Black, piece)) => piece.to_char(),
                    None => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "    a b c d e f g h")
    }
}
