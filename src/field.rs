//! Battlefield state: placed ships and the shot mask.

use alloc::vec::Vec;
use core::fmt;

use crate::common::FieldError;
use crate::mask::ShotMask;
use crate::ship::Ship;

/// An `N x N` field owning its placed ships and every shot fired at it.
///
/// Ships are kept in placement order; lookups return the first match in
/// that order.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleField {
    ships: Vec<Ship>,
    touched: ShotMask,
}

impl BattleField {
    /// Create an empty field of `size x size` cells.
    pub fn new(size: usize) -> Self {
        BattleField {
            ships: Vec::new(),
            touched: ShotMask::new(size),
        }
    }

    /// Side length of the field.
    pub fn size(&self) -> usize {
        self.touched.size()
    }

    /// Placed ships, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    fn check(&self, x: i32, y: i32) -> Result<(), FieldError> {
        if self.touched.contains(x, y) {
            Ok(())
        } else {
            Err(FieldError::OutOfBounds { x, y })
        }
    }

    /// Receive a shot at `(x, y)`. The cell is marked as touched whatever
    /// the outcome. Returns `true` if a ship registered a new hit.
    pub fn receive_shot(&mut self, x: i32, y: i32) -> Result<bool, FieldError> {
        self.touched.set(x, y)?;
        Ok(self.ships.iter_mut().any(|s| s.receive_shot(x, y)))
    }

    /// Returns `true` if a sunk ship covers `(x, y)`.
    pub fn destroyed(&self, x: i32, y: i32) -> Result<bool, FieldError> {
        self.check(x, y)?;
        Ok(self
            .ships
            .iter()
            .any(|s| s.occupies(x, y) && s.is_destroyed()))
    }

    /// The first placed ship covering `(x, y)`, if any.
    pub fn ship_at(&self, x: i32, y: i32) -> Result<Option<&Ship>, FieldError> {
        self.check(x, y)?;
        Ok(self.ships.iter().find(|s| s.occupies(x, y)))
    }

    /// Returns `true` if `(x, y)` has ever been shot.
    pub fn touched(&self, x: i32, y: i32) -> Result<bool, FieldError> {
        self.touched.get(x, y)
    }

    /// Returns `true` when every placed ship is destroyed. Vacuously `true`
    /// for a field without ships.
    pub fn won(&self) -> bool {
        self.ships.iter().all(Ship::is_destroyed)
    }

    /// Place `ship` at its current position and orientation.
    ///
    /// Fails with `OutOfBounds` if either corner of the footprint is off the
    /// field. Returns `Ok(false)` and leaves the field unchanged when a cell
    /// of the footprint is already occupied.
    pub fn place_ship(&mut self, ship: &Ship) -> Result<bool, FieldError> {
        let (x, y) = ship.position();
        self.check(x, y)?;
        let (xe, ye) = ship
            .far_corner()
            .ok_or(FieldError::OutOfBounds { x, y })?;
        self.check(xe, ye)?;

        for yi in y..=ye {
            for xi in x..=xe {
                if self.ship_at(xi, yi)?.is_some() {
                    return Ok(false);
                }
            }
        }

        let mut placed = ship.clone();
        placed.mark_placed();
        self.ships.push(placed);
        Ok(true)
    }

    /// Every cell not yet shot, row-major.
    pub fn untouched_cells(&self) -> Vec<(i32, i32)> {
        self.touched.iter_unset().collect()
    }

    /// Number of cells shot so far.
    pub fn touched_count(&self) -> usize {
        self.touched.count_ones()
    }

    /// Returns `true` once every cell has been shot.
    pub fn fully_shot(&self) -> bool {
        self.touched.is_full()
    }

    /// Number of placed ships still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_destroyed()).count()
    }

    /// Shot mask of the field.
    pub fn shot_mask(&self) -> &ShotMask {
        &self.touched
    }
}

impl fmt::Debug for BattleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BattleField {{\n  size: {},\n  touched: {:?},\n  ships: {:?}\n}}",
            self.size(),
            self.touched,
            self.ships
        )
    }
}
