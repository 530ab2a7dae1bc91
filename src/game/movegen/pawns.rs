use super::super::board::Board;
use super::super::types::{Color, Square};

impl Board {
    pub(crate) fn pawn_moves(
        &self,
        from: Square,
        color: Color,
        en_passant: Option<Square>,
    ) -> Vec<Square> {
        let mut moves = Vec::new();
        let dir = color.pawn_direction();
        let forward_r = from.0 as isize + dir;
        if !(0..8).contains(&forward_r) {
            return moves;
        }

        let forward = Square(forward_r as usize, from.1);
        if self.is_empty(forward) {
            moves.push(forward);
            if from.0 == color.pawn_start_rank() {
                // Two-square advance: both intervening squares must be empty.
                let double = Square((from.0 as isize + 2 * dir) as usize, from.1);
                if self.is_empty(double) {
                    moves.push(double);
                }
            }
        }

        for df in [-1isize, 1] {
            let capture_f = from.1 as isize + df;
            if !(0..8).contains(&capture_f) {
                continue;
            }
            let target = Square(forward_r as usize, capture_f as usize);
            match self.piece_at(target) {
                Some((occupant, _)) if occupant != color => moves.push(target),
                None if Some(target) == en_passant => moves.push(target),
                _ => {}
            }
        }

        moves
    }

    /// Both forward diagonals, unconditionally. The pawn attack pattern
    /// ignores occupancy and en passant.
    pub(crate) fn pawn_attacks(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = Vec::new();
        let forward_r = from.0 as isize + color.pawn_direction();
        if !(0..8).contains(&forward_r) {
            return moves;
        }
        for df in [-1isize, 1] {
            let capture_f = from.1 as isize + df;
            if (0..8).contains(&capture_f) {
                moves.push(Square(forward_r as usize, capture_f as usize));
            }
        }
        moves
    }
}
