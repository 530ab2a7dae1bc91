//! Check, checkmate, and stalemate detection.

use crate::game::{Color, Game, GameBuilder, MoveOutcome, Piece, Square};

fn back_rank_mate() -> GameBuilder {
    // Black king boxed in by its own pawns, white rook sweeping the back
    // rank.
    GameBuilder::new()
        .piece(Square(7, 7), Color::Black, Piece::King)
        .piece(Square(6, 6), Color::Black, Piece::Pawn)
        .piece(Square(6, 7), Color::Black, Piece::Pawn)
        .piece(Square(7, 0), Color::White, Piece::Rook)
        .piece(Square(0, 4), Color::White, Piece::King)
        .side_to_move(Color::Black)
}

#[test]
fn test_back_rank_mate_detected() {
    let game = back_rank_mate().build();
    assert!(game.is_king_in_check(Color::Black));
    assert!(game.is_checkmate(Color::Black));
    assert!(!game.is_checkmate(Color::White));
    assert!(!game.is_stalemate(Color::Black));
}

#[test]
fn test_removing_attacker_disarms_mate() {
    let game = back_rank_mate().clear(Square(7, 0)).build();
    assert!(!game.is_king_in_check(Color::Black));
    assert!(!game.is_checkmate(Color::Black));
}

#[test]
fn test_check_without_mate() {
    // Same skeleton, but the g7 pawn is gone: the king can step out.
    let game = back_rank_mate().clear(Square(6, 6)).build();
    assert!(game.is_king_in_check(Color::Black));
    assert!(!game.is_checkmate(Color::Black));
}

#[test]
fn test_block_defeats_mate() {
    // A black rook can interpose on the back rank.
    let game = back_rank_mate()
        .piece(Square(5, 3), Color::Black, Piece::Rook)
        .build();
    assert!(game.is_king_in_check(Color::Black));
    assert!(!game.is_checkmate(Color::Black));
}

#[test]
fn test_capture_defeats_mate() {
    // The attacking rook is itself capturable.
    let game = back_rank_mate()
        .piece(Square(6, 1), Color::Black, Piece::Queen)
        .build();
    assert!(!game.is_checkmate(Color::Black));
}

#[test]
fn test_fools_mate() {
    let mut game = Game::new();
    let plays = [
        ((1, 5), (2, 5)), // f3
        ((6, 4), (4, 4)), // e5
        ((1, 6), (3, 6)), // g4
        ((7, 3), (3, 7)), // Qh4#
    ];
    for (from, to) in plays {
        assert!(game.select_piece(from.0, from.1));
        assert_eq!(game.move_piece(to.0, to.1), MoveOutcome::Played);
    }
    assert!(game.is_king_in_check(Color::White));
    assert!(game.is_checkmate(Color::White));
    assert!(!game.is_checkmate(Color::Black));
}

#[test]
fn test_stalemate_detected() {
    // Black to move with a cornered king: not in check, nowhere to go.
    let game = GameBuilder::new()
        .piece(Square(7, 7), Color::Black, Piece::King)
        .piece(Square(6, 5), Color::White, Piece::Queen)
        .piece(Square(5, 6), Color::White, Piece::King)
        .side_to_move(Color::Black)
        .build();
    assert!(!game.is_king_in_check(Color::Black));
    assert!(game.is_stalemate(Color::Black));
    assert!(!game.is_checkmate(Color::Black));
}

#[test]
fn test_no_stalemate_with_free_piece() {
    let game = GameBuilder::new()
        .piece(Square(7, 7), Color::Black, Piece::King)
        .piece(Square(6, 5), Color::White, Piece::Queen)
        .piece(Square(5, 6), Color::White, Piece::King)
        .piece(Square(3, 0), Color::Black, Piece::Pawn)
        .side_to_move(Color::Black)
        .build();
    assert!(!game.is_stalemate(Color::Black));
}

#[test]
fn test_en_passant_capture_resolves_check() {
    // A black pawn double-steps and delivers check; capturing it en
    // passant removes the checker.
    let mut game = GameBuilder::new()
        .piece(Square(3, 3), Color::White, Piece::King)
        .piece(Square(4, 5), Color::White, Piece::Pawn)
        .piece(Square(6, 4), Color::Black, Piece::Pawn)
        .piece(Square(7, 0), Color::Black, Piece::King)
        .side_to_move(Color::Black)
        .build();

    game.select_piece(6, 4);
    assert_eq!(game.move_piece(4, 4), MoveOutcome::Played);
    assert!(game.is_king_in_check(Color::White));
    assert!(!game.is_checkmate(Color::White));

    game.select_piece(4, 5);
    assert_eq!(game.move_piece(5, 4), MoveOutcome::Played);
    assert!(!game.is_king_in_check(Color::White));
    assert!(game.board().is_empty(Square(4, 4)));
}
