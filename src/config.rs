use crate::attack::AttackKind;
use crate::factory::Era;
use crate::placement::PlacementKind;

/// Side length of the square battlefield unless configured otherwise.
pub const DEFAULT_GRID_SIZE: usize = 10;

/// Random trials allowed per ship before a placement pass gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Version tag written in front of every saved game.
pub const SNAPSHOT_VERSION: u8 = 1;

/// Settings chosen when a game is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub grid_size: usize,
    pub era: Era,
    pub attack: AttackKind,
    pub placement: PlacementKind,
    /// Fixed RNG seed for reproducible games.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_era(mut self, era: Era) -> Self {
        self.era = era;
        self
    }

    pub fn with_attack(mut self, attack: AttackKind) -> Self {
        self.attack = attack;
        self
    }

    pub fn with_placement(mut self, placement: PlacementKind) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            era: Era::Modern,
            attack: AttackKind::Random,
            placement: PlacementKind::Random,
            seed: None,
        }
    }
}
