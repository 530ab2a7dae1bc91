//! Game session: the state machine a caller drives a game through.
//!
//! A session is in one of three states: idle (no selection), selected (a
//! square and its cached legal destinations held), or promotion pending (a
//! pawn reached the far rank and the turn is suspended until the caller
//! picks a replacement kind). Every illegal request is a no-op with a
//! well-defined resulting state; nothing here returns an error.

#[cfg(feature = "logging")]
use log::debug;

use super::board::Board;
use super::types::{CastlingRights, Color, Piece, Square};

/// Outcome of a [`Game::move_piece`] request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing happened: no selection, destination outside the cached legal
    /// set, or the move would have exposed the mover's own king.
    Ignored,
    /// The move was applied and the turn passed to the opponent.
    Played,
    /// The move was applied; a pawn reached the far rank and the turn is
    /// suspended until [`Game::promote_pawn`] is called.
    PromotionPending,
}

/// The currently picked-up square and its cached legal destinations.
#[derive(Clone, Debug)]
pub struct Selection {
    square: Square,
    moves: Vec<Square>,
}

impl Selection {
    /// The selected square.
    #[must_use]
    pub fn square(&self) -> Square {
        self.square
    }

    /// The cached legal destinations for the selected piece.
    #[must_use]
    pub fn moves(&self) -> &[Square] {
        &self.moves
    }
}

/// A single chess game: the board plus all per-game bookkeeping.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    selection: Option<Selection>,
    castling: CastlingRights,
    en_passant_target: Option<Square>,
    pending_promotion: Option<Square>,
}

impl Game {
    /// A fresh game: standard arrangement, White to move, nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: Color::White,
            selection: None,
            castling: CastlingRights::fresh(),
            en_passant_target: None,
            pending_promotion: None,
        }
    }

    pub(crate) fn from_parts(
        board: Board,
        turn: Color,
        castling: CastlingRights,
        en_passant_target: Option<Square>,
    ) -> Self {
        Game {
            board,
            turn,
            selection: None,
            castling,
            en_passant_target,
            pending_promotion: None,
        }
    }

    /// The current board. Callers render from this; they never mutate it.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose move it is.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The active selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// The selected square, if any.
    #[must_use]
    pub fn selected_square(&self) -> Option<Square> {
        self.selection.as_ref().map(Selection::square)
    }

    /// The square awaiting a promotion choice, if any.
    #[must_use]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    /// Current castling bookkeeping.
    #[must_use]
    pub fn castling_rights(&self) -> &CastlingRights {
        &self.castling
    }

    /// The en-passant capture square left by the previous move, if any.
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Pick up the piece on `(row, col)`.
    ///
    /// Succeeds (returns `true`, caching the piece's legal destinations)
    /// only when the square holds a piece of the color to move. Anything
    /// else — empty square, opponent's piece, out-of-range coordinates, or a
    /// pending promotion — clears the selection and returns `false`.
    pub fn select_piece(&mut self, row: usize, col: usize) -> bool {
        if self.pending_promotion.is_some() {
            self.selection = None;
            return false;
        }
        let Some(square) = Square::new(row, col) else {
            self.selection = None;
            return false;
        };
        match self.board.piece_at(square) {
            Some((color, _)) if color == self.turn => {
                let moves = self
                    .board
                    .legal_moves(square, &self.castling, self.en_passant_target);
                self.selection = Some(Selection { square, moves });
                true
            }
            _ => {
                self.selection = None;
                false
            }
        }
    }

    /// Move the selected piece to `(row, col)`.
    ///
    /// The destination must be in the selection's cached legal set. The move
    /// is applied to a scratch board together with its special-move side
    /// effects, then rejected wholesale if it leaves the mover's own king
    /// attacked. The selection is consumed either way.
    pub fn move_piece(&mut self, row: usize, col: usize) -> MoveOutcome {
        if self.pending_promotion.is_some() {
            return MoveOutcome::Ignored;
        }
        let Some(selection) = self.selection.take() else {
            return MoveOutcome::Ignored;
        };
        let Some(to) = Square::new(row, col) else {
            return MoveOutcome::Ignored;
        };
        if !selection.moves.contains(&to) {
            return MoveOutcome::Ignored;
        }
        let from = selection.square;
        let Some((color, piece)) = self.board.piece_at(from) else {
            return MoveOutcome::Ignored;
        };

        let mut next = self.board.clone();
        next.move_unchecked(from, to);

        // En passant: the captured pawn sits on the rank it vacated, one
        // rank behind the landing square.
        if piece == Piece::Pawn && Some(to) == self.en_passant_target {
            let captured_rank = (to.0 as isize - color.pawn_direction()) as usize;
            next.clear_square(Square(captured_rank, to.1));
        }

        // Moved-flags are recorded before the self-check test and stay
        // recorded even if the move is rolled back; rights never come back.
        if piece == Piece::King {
            self.castling.mark_king_moved(color);
            let back = color.back_rank();
            if from == Square(back, 4) && to == Square(back, 6) {
                next.move_unchecked(Square(back, 7), Square(back, 5));
            }
            if from == Square(back, 4) && to == Square(back, 2) {
                next.move_unchecked(Square(back, 0), Square(back, 3));
            }
        }
        if piece == Piece::Rook && from.0 == color.back_rank() {
            if from.1 == 0 {
                self.castling.mark_queenside_rook_moved(color);
            }
            if from.1 == 7 {
                self.castling.mark_kingside_rook_moved(color);
            }
        }

        let previous = std::mem::replace(&mut self.board, next);
        if self.board.is_king_in_check(color) {
            self.board = previous;
            #[cfg(feature = "logging")]
            debug!("rejected {from}-{to}: leaves the {color} king in check");
            return MoveOutcome::Ignored;
        }

        if piece == Piece::Pawn && to.0 == color.pawn_promotion_rank() {
            // Turn does not advance and the en-passant target is left as-is
            // until the promotion choice arrives.
            self.pending_promotion = Some(to);
            #[cfg(feature = "logging")]
            debug!("{color} pawn reached {to}, awaiting promotion choice");
            return MoveOutcome::PromotionPending;
        }

        self.en_passant_target = if piece == Piece::Pawn && from.0.abs_diff(to.0) == 2 {
            Some(Square((from.0 + to.0) / 2, to.1))
        } else {
            None
        };

        #[cfg(feature = "logging")]
        debug!("{color} played {from}-{to}");
        self.turn = self.turn.opponent();
        MoveOutcome::Played
    }

    /// Resolve a pending promotion by replacing the pawn with `kind`.
    ///
    /// Advances the turn. A no-op (returning `false`) when no promotion is
    /// pending, or when `kind` is a pawn or king.
    pub fn promote_pawn(&mut self, kind: Piece) -> bool {
        if matches!(kind, Piece::Pawn | Piece::King) {
            return false;
        }
        let Some(square) = self.pending_promotion else {
            return false;
        };
        let Some((color, _)) = self.board.piece_at(square) else {
            return false;
        };

        let mut next = self.board.clone();
        next.set_piece(square, color, kind);
        self.board = next;
        self.pending_promotion = None;
        // A promotion move is never a two-square advance.
        self.en_passant_target = None;
        #[cfg(feature = "logging")]
        debug!("{color} promoted to {kind} on {square}");
        self.turn = self.turn.opponent();
        true
    }

    /// Whether `color`'s king is attacked on the current board.
    #[must_use]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        self.board.is_king_in_check(color)
    }

    /// Whether `color` is checkmated: in check, and no legal move of any of
    /// its pieces escapes the check.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.board.is_king_in_check(color) && !self.has_safe_move(color)
    }

    /// Whether `color` is stalemated: not in check, but every available move
    /// would leave its king attacked (including having no moves at all).
    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.board.is_king_in_check(color) && !self.has_safe_move(color)
    }

    /// True if `color` has at least one legal move whose simulation leaves
    /// its own king unattacked. Short-circuits on the first such move.
    fn has_safe_move(&self, color: Color) -> bool {
        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                let Some((piece_color, piece)) = self.board.piece_at(from) else {
                    continue;
                };
                if piece_color != color {
                    continue;
                }
                for to in self
                    .board
                    .legal_moves(from, &self.castling, self.en_passant_target)
                {
                    let mut sim = self.board.clone();
                    if piece == Piece::Pawn && Some(to) == self.en_passant_target {
                        let captured_rank = (to.0 as isize - color.pawn_direction()) as usize;
                        sim.clear_square(Square(captured_rank, to.1));
                    }
                    sim.move_unchecked(from, to);
                    if !sim.is_king_in_check(color) {
                        return true;
                    }
                }
            }
        }
        false
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
