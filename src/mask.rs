//! A square boolean mask sized at runtime.
//!
//! Cells are stored row-major in a flat `Vec<bool>`, indexed by `(x, y)`
//! where `x` is the column and `y` the row. Every accessor is bounds
//! checked and reports `FieldError::OutOfBounds` for coordinates outside
//! `[0, N)`, including negative ones.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::FieldError;

#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotMask {
    size: usize,
    cells: Vec<bool>,
}

impl ShotMask {
    /// Create an `size x size` mask with every cell cleared.
    pub fn new(size: usize) -> Self {
        ShotMask {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Side length of the mask.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` when `(x, y)` lies inside the mask.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Result<usize, FieldError> {
        if self.contains(x, y) {
            Ok(y as usize * self.size + x as usize)
        } else {
            Err(FieldError::OutOfBounds { x, y })
        }
    }

    /// Gets the bit at `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Result<bool, FieldError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Sets the bit at `(x, y)`. Bits are never cleared again.
    pub fn set(&mut self, x: i32, y: i32) -> Result<(), FieldError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = true;
        Ok(())
    }

    /// Number of set cells.
    pub fn count_ones(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Returns `true` once every cell is set.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c)
    }

    /// Iterator over the `(x, y)` positions of set cells, row-major.
    pub fn iter_set(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.positions(true)
    }

    /// Iterator over the `(x, y)` positions of cleared cells, row-major.
    pub fn iter_unset(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.positions(false)
    }

    fn positions(&self, value: bool) -> impl Iterator<Item = (i32, i32)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == value)
            .map(move |(idx, _)| ((idx % size) as i32, (idx / size) as i32))
    }
}

impl fmt::Debug for ShotMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ShotMask<{}>:", self.size)?;
        fmt::Display::fmt(self, f)?;
        writeln!(f)
    }
}

impl fmt::Display for ShotMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            for &cell in row {
                write!(f, "{} ", if cell { '■' } else { '□' })?;
            }
            if y + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
