//! Precomputed per-square target tables for the leaper pieces.

use once_cell::sync::Lazy;

use super::types::Square;

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Ray directions for rooks (ranks and files).
pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Ray directions for bishops (diagonals).
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn leaper_targets(deltas: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let rank = (idx / 8) as isize;
        let file = (idx % 8) as isize;
        deltas
            .iter()
            .filter_map(|&(dr, df)| {
                let (r, f) = (rank + dr, file + df);
                if (0..8).contains(&r) && (0..8).contains(&f) {
                    Some(Square(r as usize, f as usize))
                } else {
                    None
                }
            })
            .collect()
    })
}

/// In-bounds knight targets for every square.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| leaper_targets(&KNIGHT_DELTAS));

/// In-bounds king-step targets for every square (no castling).
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| leaper_targets(&KING_DELTAS));

#[inline]
pub(crate) fn square_index(square: Square) -> usize {
    square.0 * 8 + square.1
}
