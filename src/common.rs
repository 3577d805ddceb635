//! Common types for the rules engine: field, placement and strategy errors.

use crate::ship::ShipKind;

/// Errors returned by `BattleField` lookups and mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Coordinate lies outside `[0, N) x [0, N)`.
    OutOfBounds { x: i32, y: i32 },
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldError::OutOfBounds { x, y } => {
                write!(f, "Position ({}, {}) is not in the battlefield", x, y)
            }
        }
    }
}

/// Errors returned by placement strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// No legal slot was found for the ship within the attempt budget.
    Exhausted { ship: ShipKind, attempts: usize },
    /// The field rejected a coordinate.
    Field(FieldError),
}

impl From<FieldError> for PlacementError {
    fn from(err: FieldError) -> Self {
        PlacementError::Field(err)
    }
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::Exhausted { ship, attempts } => write!(
                f,
                "Unable to place {} after {} attempts",
                ship.name(),
                attempts
            ),
            PlacementError::Field(e) => write!(f, "Field error: {}", e),
        }
    }
}

/// Errors returned by attack strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyError {
    /// Every cell of the field has already been shot.
    NoTargetsLeft,
    /// The field rejected the chosen target.
    Field(FieldError),
}

impl From<FieldError> for StrategyError {
    fn from(err: FieldError) -> Self {
        StrategyError::Field(err)
    }
}

impl core::fmt::Display for StrategyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StrategyError::NoTargetsLeft => write!(f, "No untouched cell left to shoot at"),
            StrategyError::Field(e) => write!(f, "Field error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FieldError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for StrategyError {}
