//! Target selection for the computer attacker.
//!
//! Strategies only see what a real shooter would: the shot mask and
//! whether a shot cell holds a ship.

use alloc::boxed::Box;
use alloc::vec::Vec;
use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::StrategyError;
use crate::field::BattleField;

/// Names the available attack strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackKind {
    Random,
    Cross,
}

impl AttackKind {
    pub const ALL: [AttackKind; 2] = [AttackKind::Random, AttackKind::Cross];

    pub fn name(self) -> &'static str {
        match self {
            AttackKind::Random => "Random",
            AttackKind::Cross => "Cross",
        }
    }

    /// Look up a strategy by its name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        AttackKind::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Construct the strategy this kind names.
    pub fn build(self) -> Box<dyn AttackStrategy> {
        match self {
            AttackKind::Random => Box::new(RandomAttack),
            AttackKind::Cross => Box::new(CrossAttack),
        }
    }
}

/// Chooses one untouched cell of `field` and fires at it.
pub trait AttackStrategy {
    fn kind(&self) -> AttackKind;

    /// Fire once. Returns what `BattleField::receive_shot` returned.
    fn shoot(&mut self, rng: &mut SmallRng, field: &mut BattleField) -> Result<bool, StrategyError>;
}

fn pick<R: Rng + ?Sized>(rng: &mut R, cells: &[(i32, i32)]) -> Option<(i32, i32)> {
    if cells.is_empty() {
        None
    } else {
        Some(cells[rng.random_range(0..cells.len())])
    }
}

fn fire(field: &mut BattleField, (x, y): (i32, i32)) -> Result<bool, StrategyError> {
    let hit = field.receive_shot(x, y)?;
    debug!("computer fires at ({}, {}): {}", x, y, if hit { "hit" } else { "miss" });
    Ok(hit)
}

/// Uniform choice among untouched cells.
pub struct RandomAttack;

impl AttackStrategy for RandomAttack {
    fn kind(&self) -> AttackKind {
        AttackKind::Random
    }

    fn shoot(&mut self, rng: &mut SmallRng, field: &mut BattleField) -> Result<bool, StrategyError> {
        let target = pick(rng, &field.untouched_cells()).ok_or(StrategyError::NoTargetsLeft)?;
        fire(field, target)
    }
}

/// Hunt and target. Fires at the untouched cells forming a cross around a
/// known hit on a ship still afloat; without such a hit, hunts on a
/// checkerboard, then on whatever is left.
pub struct CrossAttack;

impl CrossAttack {
    /// Untouched neighbours of hits on ships that are not yet sunk.
    fn cross_targets(field: &BattleField) -> Vec<(i32, i32)> {
        let mut targets = Vec::new();
        for (x, y) in field.shot_mask().iter_set() {
            let open_hit = matches!(field.ship_at(x, y), Ok(Some(s)) if !s.is_destroyed());
            if !open_hit {
                continue;
            }
            for (nx, ny) in [(x, y - 1), (x + 1, y), (x, y + 1), (x - 1, y)] {
                if field.touched(nx, ny) == Ok(false) && !targets.contains(&(nx, ny)) {
                    targets.push((nx, ny));
                }
            }
        }
        targets
    }
}

impl AttackStrategy for CrossAttack {
    fn kind(&self) -> AttackKind {
        AttackKind::Cross
    }

    fn shoot(&mut self, rng: &mut SmallRng, field: &mut BattleField) -> Result<bool, StrategyError> {
        let untouched = field.untouched_cells();
        if untouched.is_empty() {
            return Err(StrategyError::NoTargetsLeft);
        }
        let parity: Vec<(i32, i32)> = untouched
            .iter()
            .copied()
            .filter(|(x, y)| (x + y) % 2 == 0)
            .collect();
        let target = pick(rng, &Self::cross_targets(field))
            .or_else(|| pick(rng, &parity))
            .or_else(|| pick(rng, &untouched))
            .ok_or(StrategyError::NoTargetsLeft)?;
        fire(field, target)
    }
}
