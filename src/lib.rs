pub mod game;

pub use game::{
    Board, CastlingRights, Color, Game, GameBuilder, MoveOutcome, Piece, Selection, Square,
};
