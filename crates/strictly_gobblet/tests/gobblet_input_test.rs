//! Pointer resolution against the default and custom layouts.

use strictly_gobblet::{
    Activation, Cell, Game, Geometry, InputMapper, Location, PieceId, Player, Point, Target,
};

fn id(index: usize) -> PieceId {
    PieceId::new(index).expect("valid piece index")
}

fn center_of(mapper: &InputMapper, row: usize, col: usize) -> Point {
    mapper.geometry().cell_center(Cell::new(row, col).expect("valid cell"))
}

#[test]
fn test_click_reserve_then_cell() {
    let mapper = InputMapper::default();
    let mut game = Game::new();

    let slot_four = mapper.geometry().reserve_center(Player::A, 4);
    let grabbed = game.click(&mapper, Point::new(slot_four.x + 10.0, slot_four.y)).unwrap();
    assert_eq!(
        grabbed,
        Activation::Selected {
            piece: id(4),
            from: Location::Reserve { slot: 4 }
        }
    );

    let placed = game.click(&mapper, center_of(&mapper, 1, 1)).unwrap();
    assert!(matches!(placed, Activation::Placed { .. }));
    assert_eq!(game.turn(), Player::B);
}

#[test]
fn test_only_movers_reserve_resolves() {
    let mapper = InputMapper::default();
    let game = Game::new();
    let b_slot = mapper.geometry().reserve_center(Player::B, 0);
    assert_eq!(mapper.resolve(b_slot, &game), Target::None);
}

#[test]
fn test_radius_depends_on_size() {
    let mapper = InputMapper::default();
    let game = Game::new();
    // 30 units from slot centres: outside a small (25), inside a large (55).
    let small = mapper.geometry().reserve_center(Player::A, 0);
    let large = mapper.geometry().reserve_center(Player::A, 5);
    assert_eq!(mapper.resolve(Point::new(small.x, small.y + 30.0), &game), Target::None);
    assert_eq!(
        mapper.resolve(Point::new(large.x, large.y + 30.0), &game),
        Target::Piece(id(5))
    );
}

#[test]
fn test_own_board_piece_resolves_to_piece() {
    let mapper = InputMapper::default();
    let mut game = Game::new();
    game.activate(Target::Piece(id(2))).unwrap();
    game.activate(Target::Cell(Cell::new(0, 0).unwrap())).unwrap();
    game.activate(Target::Piece(id(6))).unwrap();
    game.activate(Target::Cell(Cell::new(2, 2).unwrap())).unwrap();

    // A's medium: piece within radius, bare cell outside it.
    let center = center_of(&mapper, 0, 0);
    assert_eq!(mapper.resolve(center, &game), Target::Piece(id(2)));
    let corner = Point::new(center.x - 70.0, center.y - 70.0);
    assert_eq!(
        mapper.resolve(corner, &game),
        Target::Cell(Cell::new(0, 0).unwrap())
    );

    // B's small is not A's to take; its cell is still a destination.
    assert_eq!(
        mapper.resolve(center_of(&mapper, 2, 2), &game),
        Target::Cell(Cell::new(2, 2).unwrap())
    );
}

#[test]
fn test_off_board_resolves_to_nothing() {
    let mapper = InputMapper::default();
    let game = Game::new();
    assert_eq!(mapper.resolve(Point::new(10.0, 500.0), &game), Target::None);
    assert_eq!(mapper.resolve(Point::new(625.0, 300.0), &game), Target::None);
}

#[test]
fn test_reserve_takes_priority_over_board() {
    // Reserve slot 0 sits exactly on cell (0, 0).
    let geometry = Geometry {
        reserve_x_start: 250.0,
        reserve_y_a: 275.0,
        ..Geometry::default()
    };
    let mapper = InputMapper::new(geometry);
    let mut game = Game::new();

    game.activate(Target::Piece(id(5))).unwrap();
    game.activate(Target::Cell(Cell::new(0, 0).unwrap())).unwrap();
    game.activate(Target::Piece(id(6))).unwrap();
    game.activate(Target::Cell(Cell::new(2, 2).unwrap())).unwrap();

    assert_eq!(
        mapper.resolve(Point::new(250.0, 275.0), &game),
        Target::Piece(id(0))
    );
}

#[test]
fn test_anchor_follows_piece() {
    let geometry = Geometry::default();
    let mut game = Game::new();
    assert_eq!(
        geometry.anchor(&game, id(1)),
        Some(geometry.reserve_center(Player::A, 1))
    );
    game.activate(Target::Piece(id(1))).unwrap();
    game.activate(Target::Cell(Cell::new(2, 1).unwrap())).unwrap();
    assert_eq!(
        geometry.anchor(&game, id(1)),
        Some(geometry.cell_center(Cell::new(2, 1).unwrap()))
    );
}
