//! Ship factories: the fixed roster of ships for each era.

use alloc::vec::Vec;

use crate::ship::{Ship, ShipKind};

const MODERN: [ShipKind; 5] = [
    ShipKind::Cruiser,
    ShipKind::Destroyer,
    ShipKind::Submarine,
    ShipKind::Submarine,
    ShipKind::PatrolBoat,
];

const ANCIENT: [ShipKind; 5] = [
    ShipKind::Galleon,
    ShipKind::Frigate,
    ShipKind::Brig,
    ShipKind::Brig,
    ShipKind::Sloop,
];

/// Era of the fleet. Each era produces its own roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Era {
    Modern,
    Ancient,
}

impl Era {
    pub const ALL: [Era; 2] = [Era::Modern, Era::Ancient];

    pub fn name(self) -> &'static str {
        match self {
            Era::Modern => "Modern",
            Era::Ancient => "Ancient",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Era::ALL.into_iter().find(|era| era.name() == name)
    }

    /// Ship kinds of the roster, in the order they are handed out.
    pub fn kinds(self) -> &'static [ShipKind] {
        match self {
            Era::Modern => &MODERN,
            Era::Ancient => &ANCIENT,
        }
    }

    /// A fresh roster of unplaced ships.
    pub fn ships(self) -> Vec<Ship> {
        self.kinds().iter().map(|&kind| Ship::new(kind)).collect()
    }

    /// Total number of cells covered by the roster.
    pub fn total_cells(self) -> usize {
        self.kinds()
            .iter()
            .map(|kind| {
                let (h, w) = kind.dimensions();
                h * w
            })
            .sum()
    }
}
