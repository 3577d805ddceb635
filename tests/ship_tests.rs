use seabattle::{Orientation, Ship, ShipKind};

#[test]
fn test_new_ship_defaults() {
    let ship = Ship::new(ShipKind::Cruiser);
    assert_eq!(ship.height(), 8);
    assert_eq!(ship.width(), 2);
    assert_eq!(ship.total_cells(), 16);
    assert_eq!(ship.cells_hit(), 0);
    assert_eq!(ship.position(), (0, 0));
    assert_eq!(ship.orientation(), Orientation::Vertical);
    assert!(!ship.is_placed());
    assert!(!ship.is_destroyed());
    assert_eq!(ship.to_string(), "Cruiser 8x2");
    assert_eq!(ship.letter(), 'C');
}

#[test]
fn test_change_orientation_swaps_dimensions() {
    let mut ship = Ship::new(ShipKind::Destroyer);
    ship.change_orientation();
    assert_eq!((ship.height(), ship.width()), (1, 4));
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    ship.change_orientation();
    assert_eq!((ship.height(), ship.width()), (4, 1));
    assert_eq!(ship.orientation(), Orientation::Vertical);
}

#[test]
fn test_footprint_and_cells() {
    let mut ship = Ship::new(ShipKind::Submarine);
    ship.change_orientation();
    ship.set_position(2, 5);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(2, 5), (3, 5), (4, 5)]);
    for (x, y) in cells {
        assert!(ship.occupies(x, y));
    }
    assert!(!ship.occupies(5, 5));
    assert!(!ship.occupies(1, 5));
    assert!(!ship.occupies(2, 6));
    assert_eq!(ship.far_corner(), Some((4, 5)));
}

#[test]
fn test_receive_shot_counts_distinct_cells() {
    let mut ship = Ship::new(ShipKind::PatrolBoat);
    ship.set_position(4, 4);
    assert!(!ship.receive_shot(0, 0));
    assert!(ship.receive_shot(4, 4));
    // repeated hit on the same cell does not count
    assert!(!ship.receive_shot(4, 4));
    assert_eq!(ship.cells_hit(), 1);
    assert!(!ship.is_destroyed());
    assert!(ship.receive_shot(4, 5));
    assert_eq!(ship.cells_hit(), 2);
    assert!(ship.is_destroyed());
    // still occupies the cells once sunk
    assert!(ship.occupies(4, 5));
}

#[test]
fn test_cruiser_sinks_after_sixteen_hits() {
    let mut ship = Ship::new(ShipKind::Cruiser);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells.len(), 16);
    for (i, (x, y)) in cells.into_iter().enumerate() {
        assert!(!ship.is_destroyed());
        assert!(ship.receive_shot(x, y));
        assert_eq!(ship.cells_hit(), i + 1);
    }
    assert!(ship.is_destroyed());
}

#[test]
fn test_far_corner_overflow() {
    let mut ship = Ship::new(ShipKind::Destroyer);
    ship.set_position(0, i32::MAX - 3);
    assert_eq!(ship.far_corner(), Some((0, i32::MAX)));
    ship.set_position(0, i32::MAX - 2);
    assert_eq!(ship.far_corner(), None);
}
