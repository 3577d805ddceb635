#![cfg(feature = "std")]

use std::fmt::Write;

use crate::{field::BattleField, game::GameEngine, GameSnapshot, Phase, Side};

/// Text form of a coordinate: column letter, then 1-based row.
pub fn coord_to_string(x: i32, y: i32) -> String {
    let col = (b'A' + x as u8) as char;
    format!("{}{}", col, y + 1)
}

/// Render one field. Ship letters are shown only when `reveal` is set;
/// shots are always shown (`#` sunk, `X` hit, `o` miss).
pub fn render_field(field: &BattleField, reveal: bool) -> String {
    let size = field.size() as i32;
    let mut out = String::from("   ");
    for x in 0..size {
        let _ = write!(out, " {}", (b'A' + x as u8) as char);
    }
    out.push('\n');
    for y in 0..size {
        let _ = write!(out, "{:2} ", y + 1);
        for x in 0..size {
            let touched = field.touched(x, y).unwrap_or(false);
            let ship = field.ship_at(x, y).unwrap_or(None);
            let ch = match (touched, ship) {
                (true, Some(s)) if s.is_destroyed() => '#',
                (true, Some(_)) => 'X',
                (true, None) => 'o',
                (false, Some(s)) if reveal => s.letter(),
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Opponent field on top, the player's field below, then the game status.
pub fn render_view(engine: &GameEngine) -> String {
    let mut out = String::new();
    out.push_str("Opponent field:\n");
    out.push_str(&render_field(engine.opponent_field(), false));
    out.push_str("\nYour field:\n");
    out.push_str(&render_field(engine.own_field(), true));
    out.push('\n');
    out.push_str(&status_line(engine));
    out
}

/// One-line summary of phase, turn and remaining fleets.
pub fn status_line(engine: &GameEngine) -> String {
    match (engine.phase(), engine.winner()) {
        (Phase::Placement, _) => {
            let mut line = String::from("Placement phase. Ships to place:");
            for (i, ship) in engine.unplaced_ships().iter().enumerate() {
                let _ = write!(line, " [{}] {} ({:?})", i, ship, ship.orientation());
            }
            if engine.unplaced_ships().is_empty() {
                line.push_str(" none");
            }
            line
        }
        (Phase::InGame, Some(Side::Player)) => String::from("VICTORY! You have sunk all enemy ships."),
        (Phase::InGame, Some(Side::Computer)) => {
            String::from("DEFEAT. All your ships have been destroyed.")
        }
        (Phase::InGame, None) => format!(
            "Turn: {:?}. Enemy ships afloat: {}. Your ships afloat: {}. Computer strategy: {}",
            engine.current_player(),
            engine.opponent_field().ships_remaining(),
            engine.own_field().ships_remaining(),
            engine.attack_kind().name(),
        ),
    }
}

/// Short description of a saved game.
pub fn describe_snapshot(snapshot: &GameSnapshot) -> String {
    format!(
        "{} era, {}x{} grid, phase {:?}, turn {:?}, attack {}, placement {}, \
         {} ship(s) left to place, computer placed: {}\n\nOpponent field:\n{}\nYour field:\n{}",
        snapshot.era.name(),
        snapshot.grid_size,
        snapshot.grid_size,
        snapshot.phase,
        snapshot.current_player,
        snapshot.attack.name(),
        snapshot.placement.name(),
        snapshot.unplaced.len(),
        snapshot.computer_placed,
        render_field(&snapshot.opponent, true),
        render_field(&snapshot.own, true),
    )
}
