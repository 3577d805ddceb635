#![cfg(feature = "std")]

//! Commands understood by the interactive terminal game.

use crate::factory::Era;

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place the unplaced ship at `index` with its origin at `(x, y)`.
    Place { index: usize, x: i32, y: i32 },
    /// Rotate the unplaced ship at `index`.
    Rotate { index: usize },
    /// Place the remaining ships automatically.
    Auto,
    /// Fire at `(x, y)` on the opponent field.
    Fire { x: i32, y: i32 },
    /// Switch the computer attack strategy by name.
    Strategy(String),
    Save(String),
    Load(String),
    /// Start over, optionally in another era.
    New(Option<Era>),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  place <n> <coord>   place ship [n] with its top-left cell at coord (e.g. place 0 B3)
  rotate <n>          rotate ship [n] before placing it
  auto                place the remaining ships automatically
  fire <coord>        fire at the opponent field (a bare coord also fires)
  strategy <name>     computer attack strategy: Random or Cross
  save <name>         save the game
  load <name>         load a saved game
  new [era]           new game (Modern or Ancient)
  show                print the fields
  help                this text
  quit                leave";

/// Parse a coordinate such as `A5` into `(x, y)`. Columns are letters,
/// rows are 1-based numbers.
pub fn parse_coord(input: &str) -> Option<(i32, i32)> {
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let row: u32 = chars.as_str().parse().ok()?;
    let row = i32::try_from(row.checked_sub(1)?).ok()?;
    Some(((col_ch as u8 - b'A') as i32, row))
}

fn parse_index(arg: Option<&str>) -> Result<usize, String> {
    arg.ok_or_else(|| String::from("missing ship number"))?
        .parse()
        .map_err(|_| String::from("ship number must be a non-negative integer"))
}

fn parse_target(arg: Option<&str>) -> Result<(i32, i32), String> {
    let arg = arg.ok_or_else(|| String::from("missing coordinate"))?;
    parse_coord(arg).ok_or_else(|| format!("invalid coordinate {:?}", arg))
}

fn parse_name(arg: Option<&str>, what: &str) -> Result<String, String> {
    arg.map(String::from)
        .ok_or_else(|| format!("missing {}", what))
}

/// Parse one input line.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(Command::Show);
    };
    let command = match head.to_ascii_lowercase().as_str() {
        "place" | "p" => {
            let index = parse_index(parts.next())?;
            let (x, y) = parse_target(parts.next())?;
            Command::Place { index, x, y }
        }
        "rotate" | "r" => Command::Rotate {
            index: parse_index(parts.next())?,
        },
        "auto" => Command::Auto,
        "fire" | "f" => {
            let (x, y) = parse_target(parts.next())?;
            Command::Fire { x, y }
        }
        "strategy" => Command::Strategy(parse_name(parts.next(), "strategy name")?),
        "save" => Command::Save(parse_name(parts.next(), "save name")?),
        "load" => Command::Load(parse_name(parts.next(), "save name")?),
        "new" => match parts.next() {
            None => Command::New(None),
            Some(name) => Command::New(Some(
                Era::from_name(name).ok_or_else(|| format!("unknown era {:?}", name))?,
            )),
        },
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => match parse_coord(head) {
            Some((x, y)) => Command::Fire { x, y },
            None => return Err(format!("unknown command {:?}, try help", head)),
        },
    };
    if let Some(extra) = parts.next() {
        return Err(format!("unexpected argument {:?}", extra));
    }
    Ok(command)
}
