//! Commonly used types and utilities for ease of import.

pub use crate::{
    AttackKind, AttackStrategy, BattleField, Era, GameConfig, GameEngine, GameSnapshot, Phase,
    PlacementKind, PlacementStrategy, Ship, ShipKind, Side,
};

#[cfg(feature = "std")]
pub use crate::persistence::{FileStore, MemoryStore, SnapshotStore};

#[cfg(feature = "std")]
pub use crate::ui::{render_field, render_view};
