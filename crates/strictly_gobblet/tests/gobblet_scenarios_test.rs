//! End-to-end game scenarios driven through the controller.

use strictly_gobblet::{
    Activation, Cell, Game, GameStatus, MoveError, Outcome, Piece, PieceId, Player, Size, Target,
};

fn id(index: usize) -> PieceId {
    PieceId::new(index).expect("valid piece index")
}

fn cell(row: usize, col: usize) -> Cell {
    Cell::new(row, col).expect("valid cell")
}

/// Picks up `piece` and puts it on `(row, col)`.
fn play(game: &mut Game, piece: usize, row: usize, col: usize) -> Result<Activation, MoveError> {
    game.activate(Target::Piece(id(piece)))?;
    game.activate(Target::Cell(cell(row, col)))
}

#[test]
fn test_basic_win() {
    let mut game = Game::new();
    play(&mut game, 0, 0, 0).expect("A small");
    play(&mut game, 6, 2, 0).expect("B small");
    play(&mut game, 1, 0, 1).expect("A small");
    play(&mut game, 7, 2, 1).expect("B small");

    let result = play(&mut game, 2, 0, 2).expect("A medium");
    assert_eq!(
        result,
        Activation::Won {
            player: Player::A,
            to: cell(0, 2)
        }
    );
    assert_eq!(game.outcome(), Some(Outcome::Winner(Player::A)));
    assert_eq!(game.status(), GameStatus::Won(Player::A));
    assert_eq!(game.view().status_line(), "Player A wins!");
}

#[test]
fn test_legal_cover() {
    let mut game = Game::new();
    play(&mut game, 0, 0, 0).expect("A small");
    play(&mut game, 6, 1, 1).expect("B small");

    let result = play(&mut game, 2, 1, 1).expect("A medium covers B small");
    assert!(matches!(result, Activation::Placed { .. }));

    let top = game.board().top(cell(1, 1)).expect("occupied");
    assert_eq!((top.owner(), top.size()), (Player::A, Size::Medium));

    let stack: Vec<_> = game.board().stack(cell(1, 1)).iter().map(Piece::id).collect();
    assert_eq!(stack, vec![id(6), id(2)]);
}

#[test]
fn test_illegal_cover() {
    let mut game = Game::new();
    play(&mut game, 0, 0, 0).expect("A small");
    play(&mut game, 10, 1, 1).expect("B large");

    let err = play(&mut game, 1, 1, 1).expect_err("small cannot cover large");
    assert!(matches!(err, MoveError::IllegalPlacement { .. }));

    let stack: Vec<_> = game.board().stack(cell(1, 1)).iter().map(Piece::id).collect();
    assert_eq!(stack, vec![id(10)]);
    assert_eq!(game.turn(), Player::A);
    assert_eq!(game.selection(), None);
    assert_eq!(game.reserve(Player::A).len(), 5);
}

#[test]
fn test_draw() {
    // A B A
    // A B B
    // B A A
    let mut game = Game::new();
    let moves = [
        (0, 0, 0),
        (6, 0, 1),
        (1, 0, 2),
        (7, 1, 1),
        (2, 1, 0),
        (8, 1, 2),
        (3, 2, 1),
        (9, 2, 0),
    ];
    for (piece, row, col) in moves {
        let result = play(&mut game, piece, row, col).expect("legal move");
        assert!(matches!(result, Activation::Placed { .. }));
    }

    let result = play(&mut game, 4, 2, 2).expect("final move");
    assert_eq!(result, Activation::Drawn { to: cell(2, 2) });
    assert_eq!(game.outcome(), Some(Outcome::Draw));
    assert_eq!(game.view().status_line(), "Game ends in a draw!");
}

#[test]
fn test_win_beats_draw_on_full_board() {
    // A A A
    // B B A
    // A B B   with (0,2) played last
    let mut game = Game::new();
    let moves = [
        (0, 1, 2),
        (6, 1, 0),
        (1, 2, 0),
        (7, 1, 1),
        (2, 0, 0),
        (8, 2, 1),
        (3, 0, 1),
        (9, 2, 2),
    ];
    for (piece, row, col) in moves {
        play(&mut game, piece, row, col).expect("legal move");
    }
    assert!(game.outcome().is_none());

    let result = play(&mut game, 4, 0, 2).expect("final move");
    assert!(game.board().is_full());
    assert_eq!(
        result,
        Activation::Won {
            player: Player::A,
            to: cell(0, 2)
        }
    );
    assert_eq!(game.outcome(), Some(Outcome::Winner(Player::A)));
}

#[test]
fn test_finished_game_ignores_input() {
    let mut game = Game::new();
    for (piece, row, col) in [(0, 0, 0), (6, 2, 0), (1, 0, 1), (7, 2, 1), (2, 0, 2)] {
        play(&mut game, piece, row, col).expect("legal move");
    }
    assert!(game.is_finished());

    let before = game.view();
    assert_eq!(game.activate(Target::Piece(id(8))), Err(MoveError::GameOver));
    assert_eq!(game.activate(Target::Cell(cell(1, 1))), Err(MoveError::GameOver));
    assert_eq!(game.activate(Target::None), Err(MoveError::GameOver));
    assert_eq!(game.view(), before);
}

#[test]
fn test_relocation_win() {
    let mut game = Game::new();
    for (piece, row, col) in [(0, 0, 0), (6, 2, 0), (1, 0, 1), (7, 2, 1)] {
        play(&mut game, piece, row, col).expect("legal move");
    }
    // A moves a medium around before finishing the row by relocation.
    play(&mut game, 2, 1, 2).expect("A medium");
    play(&mut game, 8, 1, 0).expect("B medium");

    let result = play(&mut game, 2, 0, 2).expect("relocate medium into the row");
    assert_eq!(
        result,
        Activation::Won {
            player: Player::A,
            to: cell(0, 2)
        }
    );
    assert!(game.board().top(cell(1, 2)).is_none());
}

#[test]
fn test_moving_onto_own_piece() {
    let mut game = Game::new();
    play(&mut game, 0, 0, 0).expect("A small");
    play(&mut game, 6, 2, 2).expect("B small");

    let result = play(&mut game, 4, 0, 0).expect("A large covers own small");
    assert!(matches!(result, Activation::Placed { .. }));
    assert_eq!(game.board().stack(cell(0, 0)).len(), 2);
}

#[test]
fn test_restart_after_finish() {
    let mut game = Game::new();
    for (piece, row, col) in [(0, 0, 0), (6, 2, 0), (1, 0, 1), (7, 2, 1), (2, 0, 2)] {
        play(&mut game, piece, row, col).expect("legal move");
    }
    game.restart();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.turn(), Player::A);
    assert!(play(&mut game, 0, 1, 1).is_ok());
}
