//! Selection, move application, and turn sequencing.

use crate::game::{Color, Game, GameBuilder, MoveOutcome, Piece, Square};

#[test]
fn test_new_game_state() {
    let game = Game::new();
    assert_eq!(game.turn(), Color::White);
    assert!(game.selection().is_none());
    assert!(game.pending_promotion().is_none());
    assert!(game.en_passant_target().is_none());
    assert_eq!(game.board().piece_count(Color::White), 16);
    assert_eq!(game.board().piece_count(Color::Black), 16);
}

#[test]
fn test_select_own_piece_caches_moves() {
    let mut game = Game::new();
    assert!(game.select_piece(1, 4));
    let selection = game.selection().expect("selection should be active");
    assert_eq!(selection.square(), Square(1, 4));
    assert_eq!(selection.moves().len(), 2);
}

#[test]
fn test_select_empty_or_enemy_clears_selection() {
    let mut game = Game::new();
    assert!(game.select_piece(0, 1));

    // Empty square.
    assert!(!game.select_piece(4, 4));
    assert!(game.selection().is_none());

    // Opponent's piece.
    assert!(game.select_piece(0, 1));
    assert!(!game.select_piece(7, 1));
    assert!(game.selection().is_none());
}

#[test]
fn test_select_out_of_range_is_noop() {
    let mut game = Game::new();
    assert!(game.select_piece(0, 1));
    assert!(!game.select_piece(8, 0));
    assert!(game.selection().is_none());
}

#[test]
fn test_reselect_replaces_cache() {
    let mut game = Game::new();
    assert!(game.select_piece(1, 4));
    assert!(game.select_piece(0, 1));
    let selection = game.selection().unwrap();
    assert_eq!(selection.square(), Square(0, 1));
}

#[test]
fn test_move_without_selection_is_ignored() {
    let mut game = Game::new();
    assert_eq!(game.move_piece(3, 4), MoveOutcome::Ignored);
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn test_move_outside_cached_set_clears_selection() {
    let mut game = Game::new();
    let before = game.board().clone();
    game.select_piece(1, 4);
    assert_eq!(game.move_piece(4, 4), MoveOutcome::Ignored);
    assert!(game.selection().is_none());
    assert_eq!(game.board(), &before);
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn test_move_out_of_range_is_ignored() {
    let mut game = Game::new();
    game.select_piece(1, 4);
    assert_eq!(game.move_piece(9, 9), MoveOutcome::Ignored);
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn test_completed_move_toggles_turn_and_clears_selection() {
    let mut game = Game::new();
    game.select_piece(1, 4);
    assert_eq!(game.move_piece(3, 4), MoveOutcome::Played);
    assert!(game.selection().is_none());
    assert_eq!(game.turn(), Color::Black);
    assert!(game.board().is_empty(Square(1, 4)));
    assert_eq!(
        game.board().piece_at(Square(3, 4)),
        Some((Color::White, Piece::Pawn))
    );
}

#[test]
fn test_capture_removes_enemy_piece() {
    let mut game = GameBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::King)
        .piece(Square(7, 4), Color::Black, Piece::King)
        .piece(Square(3, 3), Color::White, Piece::Rook)
        .piece(Square(3, 6), Color::Black, Piece::Knight)
        .build();
    game.select_piece(3, 3);
    assert_eq!(game.move_piece(3, 6), MoveOutcome::Played);
    assert_eq!(
        game.board().piece_at(Square(3, 6)),
        Some((Color::White, Piece::Rook))
    );
    assert_eq!(game.board().piece_count(Color::Black), 1);
}

#[test]
fn test_move_exposing_own_king_is_rolled_back() {
    // White bishop pinned on the e-file by the black rook.
    let mut game = GameBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::King)
        .piece(Square(1, 4), Color::White, Piece::Bishop)
        .piece(Square(7, 4), Color::Black, Piece::Rook)
        .piece(Square(7, 0), Color::Black, Piece::King)
        .build();
    let before = game.board().clone();

    assert!(game.select_piece(1, 4));
    let selection = game.selection().unwrap();
    // The generator itself still offers the diagonal.
    assert!(selection.moves().contains(&Square(2, 5)));

    assert_eq!(game.move_piece(2, 5), MoveOutcome::Ignored);
    assert_eq!(game.board(), &before);
    assert_eq!(game.turn(), Color::White);
    assert!(game.selection().is_none());
}

#[test]
fn test_queries_do_not_mutate() {
    let mut game = Game::new();
    game.select_piece(1, 4);
    let board = game.board().clone();

    for color in Color::BOTH {
        assert!(!game.is_king_in_check(color));
        assert!(!game.is_checkmate(color));
        assert!(!game.is_stalemate(color));
    }

    assert_eq!(game.board(), &board);
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.selected_square(), Some(Square(1, 4)));
}

#[test]
fn test_rook_move_marks_castling_flag() {
    let mut game = GameBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::King)
        .piece(Square(0, 0), Color::White, Piece::Rook)
        .piece(Square(7, 4), Color::Black, Piece::King)
        .build();
    assert!(game.castling_rights().may_castle(Color::White, false));
    game.select_piece(0, 0);
    assert_eq!(game.move_piece(0, 1), MoveOutcome::Played);
    assert!(!game.castling_rights().may_castle(Color::White, false));
    assert!(game.castling_rights().may_castle(Color::White, true));
}
