//! Rules engine tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - per-piece legal and attack move generation
//! - `session.rs` - selection/move/turn state machine
//! - `special_moves.rs` - castling, en passant, promotion scenarios
//! - `mate.rs` - check, checkmate, stalemate detection
//! - `proptest.rs` - property-based tests

mod mate;
mod session;
