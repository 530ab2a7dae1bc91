//! Core chess types.
//!
//! The fundamental value types used throughout the engine:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (rank, file) board coordinate
//! - `CastlingRights` - which kings and rooks have moved

mod castling;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use piece::{Color, Piece};
pub use square::Square;
