//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// Per-color moved-flags for the pieces relevant to castling.
///
/// Flags only ever transition from `false` to `true`; they are never reset
/// for the lifetime of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct SideRights {
    king_moved: bool,
    kingside_rook_moved: bool,
    queenside_rook_moved: bool,
}

/// Castling bookkeeping for both colors.
///
/// `Default` is a fresh game: nothing has moved, all four castles possible
/// (board permitting).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights {
    white: SideRights,
    black: SideRights,
}

impl CastlingRights {
    /// Fresh rights: no king or rook has moved yet.
    #[must_use]
    pub fn fresh() -> Self {
        CastlingRights::default()
    }

    /// All pieces marked as moved; no castling possible for either side.
    #[must_use]
    pub const fn none() -> Self {
        let moved = SideRights {
            king_moved: true,
            kingside_rook_moved: true,
            queenside_rook_moved: true,
        };
        CastlingRights {
            white: moved,
            black: moved,
        }
    }

    /// Whether `color` may still castle on the given side (kingside or
    /// queenside), as far as moved-flags are concerned.
    #[inline]
    #[must_use]
    pub fn may_castle(&self, color: Color, kingside: bool) -> bool {
        let side = self.side(color);
        if side.king_moved {
            return false;
        }
        if kingside {
            !side.kingside_rook_moved
        } else {
            !side.queenside_rook_moved
        }
    }

    /// Whether `color`'s king has moved.
    #[inline]
    #[must_use]
    pub fn king_has_moved(&self, color: Color) -> bool {
        self.side(color).king_moved
    }

    /// Record that `color`'s king has moved.
    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        self.side_mut(color).king_moved = true;
    }

    /// Record that `color`'s kingside (h-file) rook has moved.
    #[inline]
    pub fn mark_kingside_rook_moved(&mut self, color: Color) {
        self.side_mut(color).kingside_rook_moved = true;
    }

    /// Record that `color`'s queenside (a-file) rook has moved.
    #[inline]
    pub fn mark_queenside_rook_moved(&mut self, color: Color) {
        self.side_mut(color).queenside_rook_moved = true;
    }

    fn side(&self, color: Color) -> &SideRights {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn side_mut(&mut self, color: Color) -> &mut SideRights {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}
