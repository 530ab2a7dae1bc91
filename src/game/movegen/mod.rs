//! Move generation: the legal and attack dispatch tables.
//!
//! Two deliberately separate entry points per piece kind:
//!
//! - [`Board::legal_moves`] produces playable destinations under full rules
//!   (castling, en passant, king-step attack filtering).
//! - [`Board::attack_moves`] produces the simplified threat pattern used only
//!   to answer "is this square attacked".
//!
//! The split breaks the recursion that would otherwise run through castling
//! legality: a king move is legal only if its target is not attacked, and
//! that attack test must never itself consult castling legality. The two
//! tables must not be merged.

mod kings;
mod knights;
mod pawns;
mod sliders;

use self::sliders::SliderKind;
use super::board::Board;
use super::types::{CastlingRights, Color, Piece, Square};

impl Board {
    /// Playable destinations for the piece on `from` under full rules.
    ///
    /// Session-held state (castling rights, en-passant target) is passed in
    /// explicitly; the board itself is only read. Destinations are not
    /// filtered for self-check — the session simulates the move and rejects
    /// it if the mover's own king ends up attacked.
    ///
    /// Empty square: no moves.
    #[must_use]
    pub fn legal_moves(
        &self,
        from: Square,
        rights: &CastlingRights,
        en_passant: Option<Square>,
    ) -> Vec<Square> {
        let Some((color, piece)) = self.piece_at(from) else {
            return Vec::new();
        };
        match piece {
            Piece::Pawn => self.pawn_moves(from, color, en_passant),
            Piece::Knight => self.knight_moves(from, color),
            Piece::Bishop => self.slider_moves(from, color, SliderKind::Bishop),
            Piece::Rook => self.slider_moves(from, color, SliderKind::Rook),
            Piece::Queen => self.slider_moves(from, color, SliderKind::Queen),
            Piece::King => self.king_moves(from, color, rights),
        }
    }

    /// Squares the piece on `from` threatens.
    ///
    /// Sliders and knights share their legal-move logic (occupancy rules are
    /// identical for attack purposes). Pawns threaten both forward diagonals
    /// unconditionally; kings threaten the eight adjacent squares with no
    /// castling and no attacked-square filtering.
    #[must_use]
    pub fn attack_moves(&self, from: Square) -> Vec<Square> {
        let Some((color, piece)) = self.piece_at(from) else {
            return Vec::new();
        };
        match piece {
            Piece::Pawn => self.pawn_attacks(from, color),
            Piece::Knight => self.knight_moves(from, color),
            Piece::Bishop => self.slider_moves(from, color, SliderKind::Bishop),
            Piece::Rook => self.slider_moves(from, color, SliderKind::Rook),
            Piece::Queen => self.slider_moves(from, color, SliderKind::Queen),
            Piece::King => self.king_attacks(from),
        }
    }

    /// Whether any piece of `attacker` color threatens `square`.
    ///
    /// O(64) scan, each occupied cell dispatching its attack generator.
    /// Fine for interactive play; not meant for search workloads.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                match self.piece_at(from) {
                    Some((color, _)) if color == attacker => {
                        if self.attack_moves(from).contains(&square) {
                            return true;
                        }
                    }
                    _ => {}
                }
            }
        }
        false
    }

    /// Whether `color`'s king is currently attacked. A board with no king of
    /// that color reports `false`.
    #[must_use]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => self.is_square_attacked(king, color.opponent()),
            None => false,
        }
    }
}
