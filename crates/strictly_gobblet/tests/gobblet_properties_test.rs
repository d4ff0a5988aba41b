//! Property checks over exhaustive and pseudo-random play.

use strictly_gobblet::invariants::{GameInvariants, InvariantSet};
use strictly_gobblet::{
    Activation, Cell, Game, LINES, MoveError, Outcome, PIECE_COUNT, Piece, PieceId, Player, Size,
    Target,
};
use strum::IntoEnumIterator;

/// First reserve piece of `size` for `player`.
fn reserve_piece(player: Player, size: Size) -> PieceId {
    let base = match player {
        Player::A => 0,
        Player::B => 6,
    };
    let offset = match size {
        Size::Small => 0,
        Size::Medium => 2,
        Size::Large => 4,
    };
    PieceId::new(base + offset).expect("valid piece index")
}

#[test]
fn test_covering_rule_for_all_size_pairs() {
    let center = Cell::new(1, 1).expect("valid cell");
    for below in Size::iter() {
        for above in Size::iter() {
            let mut game = Game::new();
            game.activate(Target::Piece(reserve_piece(Player::A, below))).unwrap();
            game.activate(Target::Cell(center)).unwrap();

            game.activate(Target::Piece(reserve_piece(Player::B, above))).unwrap();
            let result = game.activate(Target::Cell(center));

            let stack: Vec<_> = game.board().stack(center).iter().map(Piece::size).collect();
            if above > below {
                assert!(result.is_ok(), "{above} should cover {below}");
                assert_eq!(stack, vec![below, above]);
                assert_eq!(game.turn(), Player::A);
            } else {
                assert!(
                    matches!(result, Err(MoveError::IllegalPlacement { .. })),
                    "{above} should not cover {below}"
                );
                assert_eq!(stack, vec![below]);
                assert_eq!(game.turn(), Player::B);
            }
        }
    }
}

#[test]
fn test_each_line_wins_for_its_owner_only() {
    for line in LINES {
        let spare: Vec<_> = Cell::ALL.iter().filter(|c| !line.contains(c)).copied().collect();
        let mut game = Game::new();
        let plan = [
            (0, line[0]),
            (6, spare[0]),
            (1, line[1]),
            (7, spare[1]),
            (2, line[2]),
        ];
        let mut last = None;
        for (piece, to) in plan {
            game.activate(Target::Piece(PieceId::new(piece).unwrap())).unwrap();
            last = Some(game.activate(Target::Cell(to)).unwrap());
        }
        assert_eq!(
            last,
            Some(Activation::Won {
                player: Player::A,
                to: line[2]
            }),
            "line {line:?}"
        );
        assert!(game.board().check_win(Player::A));
        assert!(!game.board().check_win(Player::B));
    }
}

/// Tiny deterministic generator so the walk is reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }
}

#[test]
fn test_random_walk_preserves_turn_rules_and_invariants() {
    for seed in 0..50 {
        let mut rng = Lcg(seed);
        let mut game = Game::new();

        for _ in 0..400 {
            if game.is_finished() {
                break;
            }
            let target = match rng.next(3) {
                0 => Target::Piece(PieceId::new(rng.next(PIECE_COUNT)).unwrap()),
                1 => Target::Cell(Cell::from_index(rng.next(9)).unwrap()),
                _ => match game.selection() {
                    Some(_) => Target::Cell(Cell::from_index(rng.next(9)).unwrap()),
                    None => Target::None,
                },
            };

            let turn = game.turn();
            let selected_before = game.selection();
            match game.activate(target) {
                Ok(Activation::Placed { .. }) => {
                    assert_eq!(game.turn(), turn.opponent());
                    assert!(game.selection().is_none());
                }
                Ok(Activation::Won { player, .. }) => {
                    assert_eq!(player, turn);
                    assert_eq!(game.outcome(), Some(Outcome::Winner(turn)));
                    assert_eq!(game.turn(), turn);
                }
                Ok(Activation::Drawn { .. }) => {
                    assert_eq!(game.outcome(), Some(Outcome::Draw));
                    assert!(game.board().is_full());
                }
                Ok(Activation::Selected { piece, .. }) => {
                    assert_eq!(game.turn(), turn);
                    assert_eq!(game.selection().map(|s| s.piece), Some(piece));
                }
                Err(MoveError::IllegalPlacement { .. }) => {
                    assert_eq!(game.turn(), turn);
                    assert!(game.selection().is_none());
                }
                Err(MoveError::InvariantViolation(reason)) => panic!("seed {seed}: {reason}"),
                Err(_) => {
                    assert_eq!(game.turn(), turn);
                    assert_eq!(game.selection(), selected_before);
                }
            }
            assert!(GameInvariants::check_all(&game).is_ok(), "seed {seed}");
        }
    }
}
