use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    AttackKind, AttackStrategy, BattleField, CrossAttack, Era, PlacementError, PlacementKind,
    RandomAttack, Ship, ShipKind, StrategyError,
};

fn covered_cells(field: &BattleField) -> usize {
    field.ships().iter().map(Ship::total_cells).sum()
}

#[test]
fn test_registry_names() {
    assert_eq!(AttackKind::from_name("Random"), Some(AttackKind::Random));
    assert_eq!(AttackKind::from_name("Cross"), Some(AttackKind::Cross));
    assert_eq!(AttackKind::from_name("cross"), None);
    assert_eq!(AttackKind::from_name("Sniper"), None);
    for kind in AttackKind::ALL {
        assert_eq!(kind.build().kind(), kind);
        assert_eq!(AttackKind::from_name(kind.name()), Some(kind));
    }
    for kind in PlacementKind::ALL {
        assert_eq!(kind.build().kind(), kind);
        assert_eq!(PlacementKind::from_name(kind.name()), Some(kind));
    }
}

#[test]
fn test_random_placement_places_whole_roster() {
    for era in Era::ALL {
        for seed in 0..20u64 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut field = BattleField::new(10);
            PlacementKind::Random
                .build()
                .place_ships(&mut rng, &mut field, era.ships())
                .unwrap();
            assert_eq!(field.ships().len(), era.kinds().len());
            assert!(field.ships().iter().all(Ship::is_placed));
            // no overlap: occupied cells equal the roster size
            let mut occupied = 0;
            for y in 0..10 {
                for x in 0..10 {
                    if field.ship_at(x, y).unwrap().is_some() {
                        occupied += 1;
                    }
                }
            }
            assert_eq!(occupied, era.total_cells());
            assert_eq!(covered_cells(&field), era.total_cells());
        }
    }
}

#[test]
fn test_scan_placement_is_deterministic() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut a = BattleField::new(10);
    let mut b = BattleField::new(10);
    let mut scan = PlacementKind::Scan.build();
    scan.place_ships(&mut rng, &mut a, Era::Modern.ships()).unwrap();
    scan.place_ships(&mut rng, &mut b, Era::Modern.ships()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.ships()[0].position(), (0, 0));
    assert_eq!(a.ships()[1].position(), (2, 0));
}

#[test]
fn test_placement_exhausted_when_roster_does_not_fit() {
    let mut rng = SmallRng::seed_from_u64(7);
    for kind in PlacementKind::ALL {
        let mut field = BattleField::new(4);
        let roster = vec![Ship::new(ShipKind::PatrolBoat), Ship::new(ShipKind::Cruiser)];
        let err = kind
            .build()
            .place_ships(&mut rng, &mut field, roster)
            .unwrap_err();
        assert!(matches!(
            err,
            PlacementError::Exhausted { ship: ShipKind::Cruiser, .. }
        ));
        // partial placement is kept
        assert_eq!(field.ships().len(), 1);
        assert_eq!(field.ships()[0].kind(), ShipKind::PatrolBoat);
    }
}

#[test]
fn test_random_attack_never_repeats_and_exhausts() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut field = BattleField::new(5);
    let mut attack = RandomAttack;
    for i in 0..25 {
        assert_eq!(field.touched_count(), i);
        attack.shoot(&mut rng, &mut field).unwrap();
    }
    assert!(field.fully_shot());
    assert_eq!(
        attack.shoot(&mut rng, &mut field).unwrap_err(),
        StrategyError::NoTargetsLeft
    );
}

#[test]
fn test_cross_attack_follows_up_on_hit() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut field = BattleField::new(10);
    let mut ship = Ship::new(ShipKind::Destroyer);
    ship.set_position(5, 3);
    field.place_ship(&ship).unwrap();
    assert!(field.receive_shot(5, 4).unwrap());

    let neighbours = [(5, 3), (6, 4), (5, 5), (4, 4)];
    let mut attack = CrossAttack;
    let hit = attack.shoot(&mut rng, &mut field).unwrap();
    assert_eq!(field.touched_count(), 2);
    let shot = neighbours
        .iter()
        .copied()
        .find(|&(x, y)| field.touched(x, y).unwrap())
        .expect("second shot lands next to the hit");
    assert_eq!(hit, shot.0 == 5);
}

#[test]
fn test_cross_attack_sinks_and_exhausts() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut field = BattleField::new(6);
    PlacementKind::Random
        .build()
        .place_ships(&mut rng, &mut field, vec![Ship::new(ShipKind::Frigate), Ship::new(ShipKind::Sloop)])
        .unwrap();
    let mut attack = CrossAttack;
    while !field.won() {
        attack.shoot(&mut rng, &mut field).unwrap();
    }
    // every remaining cell can still be targeted
    while !field.fully_shot() {
        attack.shoot(&mut rng, &mut field).unwrap();
    }
    assert_eq!(
        attack.shoot(&mut rng, &mut field).unwrap_err(),
        StrategyError::NoTargetsLeft
    );
}

#[test]
fn test_cross_attack_hunts_on_parity_first() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut field = BattleField::new(6);
    let mut attack = CrossAttack;
    for _ in 0..18 {
        assert!(!attack.shoot(&mut rng, &mut field).unwrap());
    }
    for (x, y) in field.shot_mask().iter_set() {
        assert_eq!((x + y) % 2, 0);
    }
}
