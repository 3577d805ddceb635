use std::path::PathBuf;

use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use seabattle::persistence::{decode, encode};
use seabattle::{
    AttackKind, Era, FileStore, GameConfig, GameEngine, GameSnapshot, MemoryStore, Phase,
    PlacementKind, SnapshotStore,
};

/// Drive an engine into some reachable state: partial or full placement and
/// a number of shots.
fn random_engine(seed: u64) -> GameEngine {
    let mut rng = SmallRng::seed_from_u64(seed);
    let era = if rng.random() { Era::Modern } else { Era::Ancient };
    let attack = if rng.random() { AttackKind::Random } else { AttackKind::Cross };
    let config = GameConfig::default()
        .with_seed(seed)
        .with_era(era)
        .with_attack(attack)
        .with_placement(PlacementKind::Random);
    let mut engine = GameEngine::new(config);

    if rng.random_bool(0.8) {
        let _ = engine.place_ships_computer();
    }
    let manual = rng.random_range(0..=engine.unplaced_ships().len());
    for _ in 0..manual {
        let x = rng.random_range(-1..10);
        let y = rng.random_range(-1..10);
        if rng.random() {
            engine.change_ship_orientation(0);
        }
        engine.place_ship(0, x, y);
    }
    if rng.random_bool(0.7) {
        let _ = engine.place_remaining_randomly();
    }
    if engine.phase() == Phase::InGame {
        let shots = rng.random_range(0..60);
        for _ in 0..shots {
            if engine.won() {
                break;
            }
            engine.shot(rng.random_range(0..10), rng.random_range(0..10));
        }
    }
    engine
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("seabattle-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn assert_same_game(a: &GameEngine, b: &GameEngine) {
    assert_eq!(a.phase(), b.phase());
    assert_eq!(a.current_player(), b.current_player());
    assert_eq!(a.own_field(), b.own_field());
    assert_eq!(a.opponent_field(), b.opponent_field());
    assert_eq!(a.unplaced_ships(), b.unplaced_ships());
    assert_eq!(a.computer_placed(), b.computer_placed());
    assert_eq!(a.attack_kind(), b.attack_kind());
    assert_eq!(a.placement_kind(), b.placement_kind());
    assert_eq!(a.era(), b.era());
    assert_eq!(a.won(), b.won());
    assert_eq!(a.winner(), b.winner());
}

#[test]
fn test_memory_store_roundtrip() {
    let engine = random_engine(42);
    let mut store = MemoryStore::new();
    engine.save(&mut store, "slot1").unwrap();
    assert_eq!(store.len(), 1);

    let mut loaded = GameEngine::new(GameConfig::default().with_seed(1));
    loaded.load(&store, "slot1").unwrap();
    assert_same_game(&engine, &loaded);
    assert_eq!(engine.snapshot(), loaded.snapshot());
}

#[test]
fn test_file_store_roundtrip() {
    let dir = temp_dir("file-roundtrip");
    let mut store = FileStore::new(&dir);
    let mut engine = random_engine(7);
    engine.set_strategy("Cross");
    engine.save(&mut store, "game.sav").unwrap();
    assert!(store.path("game.sav").exists());

    let mut loaded = GameEngine::default();
    loaded.load(&store, "game.sav").unwrap();
    assert_same_game(&engine, &loaded);
    assert_eq!(loaded.attack_kind(), AttackKind::Cross);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_load_missing_keeps_current_game() {
    let dir = temp_dir("missing");
    let store = FileStore::new(&dir);
    let mut engine = random_engine(3);
    let before = engine.snapshot();
    assert!(engine.load(&store, "nope").is_err());
    assert!(engine.load(&MemoryStore::new(), "nope").is_err());
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_decode_rejects_garbage_and_other_versions() {
    let snapshot = random_engine(5).snapshot();
    let mut bytes = encode(&snapshot).unwrap();
    assert_eq!(decode(&bytes).unwrap(), snapshot);

    assert!(decode(&bytes[..bytes.len() / 2]).is_err());
    bytes[0] = bytes[0].wrapping_add(1);
    let err = decode(&bytes).unwrap_err();
    assert!(err.to_string().contains("version"));
}

#[test]
fn test_loaded_game_keeps_playing() {
    let mut engine = GameEngine::new(GameConfig::default().with_seed(11));
    engine.place_ships_computer().unwrap();
    engine.place_remaining_randomly().unwrap();
    for x in 0..5 {
        engine.shot(x, 4);
    }
    let mut store = MemoryStore::new();
    engine.save(&mut store, "mid").unwrap();

    let mut loaded = GameEngine::from_snapshot(store.load("mid").unwrap(), Some(99));
    assert_eq!(loaded.phase(), Phase::InGame);
    assert_eq!(loaded.version(), 0);
    if !loaded.won() {
        let (x, y) = loaded.opponent_field().untouched_cells()[0];
        let own_shots = loaded.own_field().touched_count();
        loaded.shot(x, y);
        assert!(loaded.opponent_touched(x, y));
        if !loaded.won() {
            assert_eq!(loaded.own_field().touched_count(), own_shots + 1);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn snapshot_roundtrip(seed in any::<u64>()) {
        let engine = random_engine(seed);
        let snapshot = engine.snapshot();
        let bytes = bincode::serialize(&snapshot).unwrap();
        let decoded: GameSnapshot = bincode::deserialize(&bytes).unwrap();
        prop_assert_eq!(&decoded, &snapshot);

        let restored = GameEngine::from_snapshot(decoded, None);
        prop_assert_eq!(restored.snapshot(), snapshot);
    }
}
