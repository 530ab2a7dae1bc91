use super::super::attack_tables::{square_index, KNIGHT_TARGETS};
use super::super::board::Board;
use super::super::types::{Color, Square};

impl Board {
    pub(crate) fn knight_moves(&self, from: Square, color: Color) -> Vec<Square> {
        KNIGHT_TARGETS[square_index(from)]
            .iter()
            .copied()
            .filter(|&to| match self.piece_at(to) {
                Some((occupant, _)) => occupant != color,
                None => true,
            })
            .collect()
    }
}
