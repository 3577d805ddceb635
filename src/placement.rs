//! Strategies that place a whole roster without human interaction.

use alloc::boxed::Box;
use alloc::vec::Vec;
use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::PlacementError;
use crate::config::MAX_PLACEMENT_ATTEMPTS;
use crate::field::BattleField;
use crate::ship::Ship;

/// Names the available placement strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementKind {
    Random,
    Scan,
}

impl PlacementKind {
    pub const ALL: [PlacementKind; 2] = [PlacementKind::Random, PlacementKind::Scan];

    pub fn name(self) -> &'static str {
        match self {
            PlacementKind::Random => "Random",
            PlacementKind::Scan => "Scan",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        PlacementKind::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Construct the strategy this kind names.
    pub fn build(self) -> Box<dyn PlacementStrategy> {
        match self {
            PlacementKind::Random => Box::new(RandomPlacement),
            PlacementKind::Scan => Box::new(ScanPlacement),
        }
    }
}

/// Places a roster of ships onto a field.
///
/// On error the ships placed before the failing one stay on the field; the
/// roster is consumed either way.
pub trait PlacementStrategy {
    fn kind(&self) -> PlacementKind;

    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        field: &mut BattleField,
        roster: Vec<Ship>,
    ) -> Result<(), PlacementError>;
}

/// Uniform random trials over in-bounds origins and both orientations.
pub struct RandomPlacement;

impl RandomPlacement {
    fn place_one(
        rng: &mut SmallRng,
        field: &mut BattleField,
        mut ship: Ship,
    ) -> Result<(), PlacementError> {
        let size = field.size();
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            if rng.random() {
                ship.change_orientation();
            }
            if ship.width() > size || ship.height() > size {
                continue;
            }
            let x = rng.random_range(0..=size - ship.width()) as i32;
            let y = rng.random_range(0..=size - ship.height()) as i32;
            ship.set_position(x, y);
            if field.place_ship(&ship)? {
                debug!("placed {} at ({}, {})", ship, x, y);
                return Ok(());
            }
        }
        Err(PlacementError::Exhausted {
            ship: ship.kind(),
            attempts: MAX_PLACEMENT_ATTEMPTS,
        })
    }
}

impl PlacementStrategy for RandomPlacement {
    fn kind(&self) -> PlacementKind {
        PlacementKind::Random
    }

    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        field: &mut BattleField,
        roster: Vec<Ship>,
    ) -> Result<(), PlacementError> {
        for ship in roster {
            Self::place_one(rng, field, ship)?;
        }
        Ok(())
    }
}

/// Deterministic first fit: scans origins row-major, trying the ship's
/// current orientation first and then the rotated one.
pub struct ScanPlacement;

impl ScanPlacement {
    fn place_one(field: &mut BattleField, mut ship: Ship) -> Result<(), PlacementError> {
        let size = field.size() as i32;
        let mut attempts = 0;
        for _ in 0..2 {
            let max_x = size - ship.width() as i32;
            let max_y = size - ship.height() as i32;
            for y in 0..=max_y {
                for x in 0..=max_x {
                    attempts += 1;
                    ship.set_position(x, y);
                    if field.place_ship(&ship)? {
                        debug!("placed {} at ({}, {})", ship, x, y);
                        return Ok(());
                    }
                }
            }
            ship.change_orientation();
        }
        Err(PlacementError::Exhausted {
            ship: ship.kind(),
            attempts,
        })
    }
}

impl PlacementStrategy for ScanPlacement {
    fn kind(&self) -> PlacementKind {
        PlacementKind::Scan
    }

    fn place_ships(
        &mut self,
        _rng: &mut SmallRng,
        field: &mut BattleField,
        roster: Vec<Ship>,
    ) -> Result<(), PlacementError> {
        for ship in roster {
            Self::place_one(field, ship)?;
        }
        Ok(())
    }
}
