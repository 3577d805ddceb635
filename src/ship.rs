//! Ship kinds and the rectangular ship entity placed on a `BattleField`.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Orientation of a ship. Kinds are defined in their vertical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }
}

/// Every ship kind known to the ship factories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Cruiser,
    Destroyer,
    Submarine,
    PatrolBoat,
    Galleon,
    Frigate,
    Brig,
    Sloop,
}

impl ShipKind {
    /// Ship's name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Submarine => "Submarine",
            ShipKind::PatrolBoat => "Patrol boat",
            ShipKind::Galleon => "Galleon",
            ShipKind::Frigate => "Frigate",
            ShipKind::Brig => "Brig",
            ShipKind::Sloop => "Sloop",
        }
    }

    /// One-letter tag used when rendering a field.
    pub const fn letter(self) -> char {
        match self {
            ShipKind::Cruiser => 'C',
            ShipKind::Destroyer => 'D',
            ShipKind::Submarine => 'S',
            ShipKind::PatrolBoat => 'P',
            ShipKind::Galleon => 'G',
            ShipKind::Frigate => 'F',
            ShipKind::Brig => 'B',
            ShipKind::Sloop => 'L',
        }
    }

    /// `(height, width)` in the vertical orientation.
    pub const fn dimensions(self) -> (usize, usize) {
        match self {
            ShipKind::Cruiser => (8, 2),
            ShipKind::Destroyer => (4, 1),
            ShipKind::Submarine => (3, 1),
            ShipKind::PatrolBoat => (2, 1),
            ShipKind::Galleon => (5, 1),
            ShipKind::Frigate => (4, 1),
            ShipKind::Brig => (3, 1),
            ShipKind::Sloop => (2, 1),
        }
    }
}

/// A rectangular ship. The footprint covers
/// `[x, x + width) x [y, y + height)` from its top-left origin.
///
/// Hits are tracked per footprint cell so that repeated shots on the same
/// cell count once.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    kind: ShipKind,
    height: usize,
    width: usize,
    x: i32,
    y: i32,
    placed: bool,
    orientation: Orientation,
    hits: Vec<bool>,
    cells_hit: usize,
}

impl Ship {
    /// A fresh, unplaced ship of `kind` in vertical orientation at (0, 0).
    pub fn new(kind: ShipKind) -> Self {
        let (height, width) = kind.dimensions();
        Ship {
            kind,
            height,
            width,
            x: 0,
            y: 0,
            placed: false,
            orientation: Orientation::Vertical,
            hits: vec![false; height * width],
            cells_hit: 0,
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn letter(&self) -> char {
        self.kind.letter()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Top-left cell of the footprint.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Set the origin. Bounds are checked by the field on placement.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Swap height and width. Must be settled before the ship is placed.
    pub fn change_orientation(&mut self) {
        core::mem::swap(&mut self.height, &mut self.width);
        self.orientation = self.orientation.flipped();
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    pub(crate) fn mark_placed(&mut self) {
        self.placed = true;
    }

    pub fn total_cells(&self) -> usize {
        self.height * self.width
    }

    pub fn cells_hit(&self) -> usize {
        self.cells_hit
    }

    /// Bottom-right cell of the footprint, `None` if it does not fit in `i32`.
    pub fn far_corner(&self) -> Option<(i32, i32)> {
        let dx = i32::try_from(self.width).ok()? - 1;
        let dy = i32::try_from(self.height).ok()? - 1;
        Some((self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// Returns `true` if `(x, y)` lies within the footprint, hit or not.
    pub fn occupies(&self, x: i32, y: i32) -> bool {
        self.offset(x, y).is_some()
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let dx = x.checked_sub(self.x)?;
        let dy = y.checked_sub(self.y)?;
        if dx < 0 || dy < 0 || dx as usize >= self.width || dy as usize >= self.height {
            return None;
        }
        Some(dy as usize * self.width + dx as usize)
    }

    /// Register a shot at `(x, y)`. Returns `true` only when the cell is part
    /// of the footprint and had not been hit before.
    pub fn receive_shot(&mut self, x: i32, y: i32) -> bool {
        match self.offset(x, y) {
            Some(idx) if !self.hits[idx] => {
                self.hits[idx] = true;
                self.cells_hit += 1;
                true
            }
            _ => false,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.cells_hit == self.total_cells()
    }

    /// Iterator over every footprint cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.height as i32)
            .flat_map(move |dy| (0..self.width as i32).map(move |dx| (self.x + dx, self.y + dy)))
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}x{}", self.name(), self.height, self.width)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: ({}, {}), size: {}x{}, orientation: {:?}, placed: {}, hits: {}/{} }}",
            self.name(),
            self.x,
            self.y,
            self.height,
            self.width,
            self.orientation,
            self.placed,
            self.cells_hit,
            self.total_cells(),
        )
    }
}
