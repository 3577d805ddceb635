use rand::{rngs::SmallRng, Rng, SeedableRng};
use seabattle::{init_logging, AttackKind, GameConfig, GameEngine, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: {} <engine-seed> <player-seed> [Random|Cross]", args[0]);
        std::process::exit(1);
    }
    let engine_seed: u64 = args[1].parse()?;
    let player_seed: u64 = args[2].parse()?;
    let attack = match args.get(3) {
        Some(name) => AttackKind::from_name(name)
            .ok_or_else(|| anyhow::anyhow!("unknown attack strategy {:?}", name))?,
        None => AttackKind::Random,
    };
    init_logging();

    let config = GameConfig::default()
        .with_seed(engine_seed)
        .with_attack(attack);
    let mut engine = GameEngine::new(config);
    let mut player_rng = SmallRng::seed_from_u64(player_seed);

    engine.place_remaining_randomly()?;
    engine.place_ships_computer()?;

    let mut player_shots = 0usize;
    let mut player_hits = 0usize;
    while !engine.won() {
        if engine.current_player() == Side::Computer && !engine.computer_turn() {
            anyhow::bail!("computer could not take its turn");
        }
        let targets = engine.opponent_field().untouched_cells();
        if targets.is_empty() {
            anyhow::bail!("player ran out of targets");
        }
        let (x, y) = targets[player_rng.random_range(0..targets.len())];
        player_shots += 1;
        if engine.shot(x, y) {
            player_hits += 1;
        }
    }

    let winner = match engine.winner() {
        Some(Side::Player) => "player",
        Some(Side::Computer) => "computer",
        None => anyhow::bail!("game ended without a winner"),
    };
    let result = json!({
        "winner": winner,
        "attack": engine.attack_kind().name(),
        "player": {"shots": player_shots, "hits": player_hits},
        "computer": {"shots": engine.own_field().touched_count()},
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
