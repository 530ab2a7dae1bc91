use super::super::attack_tables::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::board::Board;
use super::super::types::{Color, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderKind {
    Bishop,
    Rook,
    Queen,
}

impl Board {
    pub(crate) fn slider_moves(&self, from: Square, color: Color, kind: SliderKind) -> Vec<Square> {
        let mut moves = Vec::new();
        match kind {
            SliderKind::Rook => self.cast_rays(from, color, &ROOK_DIRECTIONS, &mut moves),
            SliderKind::Bishop => self.cast_rays(from, color, &BISHOP_DIRECTIONS, &mut moves),
            SliderKind::Queen => {
                self.cast_rays(from, color, &ROOK_DIRECTIONS, &mut moves);
                self.cast_rays(from, color, &BISHOP_DIRECTIONS, &mut moves);
            }
        }
        moves
    }

    /// Walk each ray until the board edge, stopping at the first occupied
    /// square (included when it holds an enemy piece).
    fn cast_rays(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        moves: &mut Vec<Square>,
    ) {
        for &(dr, df) in directions {
            let mut r = from.0 as isize + dr;
            let mut f = from.1 as isize + df;
            while (0..8).contains(&r) && (0..8).contains(&f) {
                let to = Square(r as usize, f as usize);
                match self.piece_at(to) {
                    None => moves.push(to),
                    Some((occupant, _)) => {
                        if occupant != color {
                            moves.push(to);
                        }
                        break;
                    }
                }
                r += dr;
                f += df;
            }
        }
    }
}
