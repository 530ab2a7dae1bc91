//! Chess rules engine: board state, legal-move generation, and game sequencing.
//!
//! The engine splits into a stateful session ([`Game`]) that owns the board
//! and all per-game bookkeeping, and stateless move generation over board
//! snapshots (the `legal_moves` / `attack_moves` pair on [`Board`]).
//! Supports full piece rules including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use chess_rules::game::{Color, Game, MoveOutcome};
//!
//! let mut game = Game::new();
//! assert_eq!(game.turn(), Color::White);
//!
//! // Push the e-pawn two squares.
//! game.select_piece(1, 4);
//! assert_eq!(game.move_piece(3, 4), MoveOutcome::Played);
//! assert_eq!(game.turn(), Color::Black);
//! ```

mod attack_tables;
mod board;
mod builder;
mod error;
mod movegen;
mod session;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use board::Board;
pub use builder::GameBuilder;
pub use error::SquareError;
pub use session::{Game, MoveOutcome, Selection};
pub use types::{CastlingRights, Color, Piece, Square};
