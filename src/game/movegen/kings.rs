use super::super::attack_tables::{square_index, KING_TARGETS};
use super::super::board::Board;
use super::super::types::{CastlingRights, Color, Piece, Square};

impl Board {
    pub(crate) fn king_moves(
        &self,
        from: Square,
        color: Color,
        rights: &CastlingRights,
    ) -> Vec<Square> {
        let enemy = color.opponent();
        let mut moves: Vec<Square> = KING_TARGETS[square_index(from)]
            .iter()
            .copied()
            .filter(|&to| match self.piece_at(to) {
                Some((occupant, _)) => occupant != color,
                None => true,
            })
            .filter(|&to| !self.is_square_attacked(to, enemy))
            .collect();

        // A king in check may not castle out of it.
        if self.is_square_attacked(from, enemy) {
            return moves;
        }

        let back = color.back_rank();
        if from != Square(back, 4) {
            return moves;
        }

        // Kingside: rook still on h, f and g empty, f and g not attacked.
        if rights.may_castle(color, true)
            && self.piece_at(Square(back, 7)) == Some((color, Piece::Rook))
            && self.is_empty(Square(back, 5))
            && self.is_empty(Square(back, 6))
            && !self.is_square_attacked(Square(back, 5), enemy)
            && !self.is_square_attacked(Square(back, 6), enemy)
        {
            moves.push(Square(back, 6));
        }

        // Queenside: rook still on a, b/c/d empty, d and c not attacked.
        // The b-file square only needs to be clear for the rook's passage.
        if rights.may_castle(color, false)
            && self.piece_at(Square(back, 0)) == Some((color, Piece::Rook))
            && self.is_empty(Square(back, 1))
            && self.is_empty(Square(back, 2))
            && self.is_empty(Square(back, 3))
            && !self.is_square_attacked(Square(back, 3), enemy)
            && !self.is_square_attacked(Square(back, 2), enemy)
        {
            moves.push(Square(back, 2));
        }

        moves
    }

    /// The eight adjacent squares, unfiltered. Used only for attack testing;
    /// castling must never appear here or the attacked-square test would
    /// recurse through castling legality.
    pub(crate) fn king_attacks(&self, from: Square) -> Vec<Square> {
        KING_TARGETS[square_index(from)].clone()
    }
}
