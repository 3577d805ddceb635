use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use seabattle::{
    cli::{parse_command, Command, HELP},
    init_logging_with, level_from_env,
    persistence::{FileStore, SnapshotStore},
    ui::{coord_to_string, describe_snapshot, render_view},
    AttackKind, Era, GameConfig, GameEngine, Phase, PlacementKind, Side,
    DEFAULT_GRID_SIZE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level; overrides SEABATTLE_LOG.
    #[arg(long, global = true)]
    log_level: Option<log::LevelFilter>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EraArg {
    Modern,
    Ancient,
}

impl From<EraArg> for Era {
    fn from(arg: EraArg) -> Self {
        match arg {
            EraArg::Modern => Era::Modern,
            EraArg::Ancient => Era::Ancient,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AttackArg {
    Random,
    Cross,
}

impl From<AttackArg> for AttackKind {
    fn from(arg: AttackArg) -> Self {
        match arg {
            AttackArg::Random => AttackKind::Random,
            AttackArg::Cross => AttackKind::Cross,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PlacementArg {
    Random,
    Scan,
}

impl From<PlacementArg> for PlacementKind {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::Random => PlacementKind::Random,
            PlacementArg::Scan => PlacementKind::Scan,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: usize,
        #[arg(long, value_enum, default_value_t = EraArg::Modern)]
        era: EraArg,
        #[arg(long, value_enum, default_value_t = AttackArg::Random)]
        attack: AttackArg,
        #[arg(long, value_enum, default_value_t = PlacementArg::Random)]
        placement: PlacementArg,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        /// Directory holding saved games.
        #[arg(long, default_value = "saves")]
        save_dir: PathBuf,
    },
    /// Print a saved game.
    Inspect {
        name: String,
        #[arg(long, default_value = "saves")]
        save_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging_with(cli.log_level.unwrap_or_else(level_from_env));

    match cli.command {
        Commands::Play {
            size,
            era,
            attack,
            placement,
            seed,
            save_dir,
        } => {
            if size == 0 || size > 26 {
                return Err(anyhow::anyhow!("grid size must be between 1 and 26"));
            }
            let mut config = GameConfig::default()
                .with_grid_size(size)
                .with_era(era.into())
                .with_attack(attack.into())
                .with_placement(placement.into());
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                config = config.with_seed(s);
            }
            let mut store = FileStore::new(save_dir);
            run_interactive(GameEngine::new(config), &mut store)?;
        }
        Commands::Inspect { name, save_dir } => {
            let store = FileStore::new(save_dir);
            let snapshot = store.load(&name)?;
            println!("{}", describe_snapshot(&snapshot));
        }
    }
    Ok(())
}

fn run_interactive(mut engine: GameEngine, store: &mut FileStore) -> anyhow::Result<()> {
    engine.place_ships_computer()?;
    println!("{}", HELP);
    println!("\n{}", render_view(&engine));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let command = match parse_command(&line?) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::Show => {}
            Command::Place { index, x, y } => {
                if !engine.place_ship(index, x, y) {
                    println!("Cannot place ship [{}] at {}", index, coord_to_string(x, y));
                }
            }
            Command::Rotate { index } => {
                if !engine.change_ship_orientation(index) {
                    println!("No unplaced ship [{}]", index);
                }
            }
            Command::Auto => {
                if let Err(e) = engine.place_remaining_randomly() {
                    println!("{}", e);
                }
            }
            Command::Fire { x, y } => {
                if engine.phase() != Phase::InGame {
                    println!("Place all your ships first");
                } else {
                    if engine.current_player() == Side::Computer {
                        engine.computer_turn();
                    }
                    let before = engine.version();
                    let computer_shots = engine.own_field().touched_count();
                    let hit = engine.shot(x, y);
                    if engine.version() != before {
                        println!(
                            "You fired at {} -> {}",
                            coord_to_string(x, y),
                            if hit { "hit" } else { "miss" }
                        );
                        if engine.own_field().touched_count() > computer_shots {
                            println!("The computer fired back.");
                        }
                    } else {
                        println!("Shot at {} not accepted", coord_to_string(x, y));
                    }
                }
            }
            Command::Strategy(name) => {
                if !engine.set_strategy(&name) {
                    println!("Unknown strategy {:?}; keeping {}", name, engine.attack_kind().name());
                }
            }
            Command::Save(name) => match engine.save(store, &name) {
                Ok(()) => println!("Saved to {}", store.path(&name).display()),
                Err(e) => println!("Save failed: {:#}", e),
            },
            Command::Load(name) => {
                if let Err(e) = engine.load(&*store, &name) {
                    println!("Load failed: {:#}", e);
                }
            }
            Command::New(era) => {
                let era = era.unwrap_or(engine.next_era());
                let attack = engine.attack_kind().build();
                let placement = engine.placement_kind().build();
                engine.new_game(era, attack, placement);
                engine.place_ships_computer()?;
            }
        }
        println!("\n{}", render_view(&engine));
        if engine.won() {
            println!("Game over. Type `new` to play again or `quit` to leave.");
        }
    }
    Ok(())
}
