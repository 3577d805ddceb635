//! The game engine: two battlefields, the placement/in-game phase machine
//! and turn alternation between the player and the computer.

use alloc::boxed::Box;
use alloc::vec::Vec;
use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    attack::{AttackKind, AttackStrategy},
    common::PlacementError,
    config::GameConfig,
    factory::Era,
    field::BattleField,
    placement::{PlacementKind, PlacementStrategy},
    ship::Ship,
};

/// Phase of a game. Only ever moves from `Placement` to `InGame`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Placement,
    InGame,
}

/// Owner of the next shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Computer,
}

/// Everything needed to rebuild an engine in an observably identical state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub grid_size: usize,
    pub era: Era,
    pub phase: Phase,
    pub current_player: Side,
    /// The player's own field, fired at by the computer.
    pub own: BattleField,
    /// The computer's field, fired at by the player.
    pub opponent: BattleField,
    pub attack: AttackKind,
    pub placement: PlacementKind,
    pub unplaced: Vec<Ship>,
    pub computer_placed: bool,
}

type Listener = Box<dyn FnMut()>;

/// Core game logic for one human player against the computer.
pub struct GameEngine {
    grid_size: usize,
    era: Era,
    next_era: Era,
    phase: Phase,
    current_player: Side,
    own: BattleField,
    opponent: BattleField,
    attack: Box<dyn AttackStrategy>,
    placement: Box<dyn PlacementStrategy>,
    unplaced: Vec<Ship>,
    computer_placed: bool,
    rng: SmallRng,
    listeners: Vec<Listener>,
    version: u64,
}

impl GameEngine {
    /// Create an engine in the placement phase from `config`.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => entropy_rng(),
        };
        Self {
            grid_size: config.grid_size,
            era: config.era,
            next_era: config.era,
            phase: Phase::Placement,
            current_player: Side::Player,
            own: BattleField::new(config.grid_size),
            opponent: BattleField::new(config.grid_size),
            attack: config.attack.build(),
            placement: config.placement.build(),
            unplaced: config.era.ships(),
            computer_placed: false,
            rng,
            listeners: Vec::new(),
            version: 0,
        }
    }

    /// Restart with fresh fields, a new roster from `era` and the given
    /// strategies. Listeners stay subscribed.
    pub fn new_game(
        &mut self,
        era: Era,
        attack: Box<dyn AttackStrategy>,
        placement: Box<dyn PlacementStrategy>,
    ) {
        self.era = era;
        self.next_era = era;
        self.phase = Phase::Placement;
        self.current_player = Side::Player;
        self.own = BattleField::new(self.grid_size);
        self.opponent = BattleField::new(self.grid_size);
        self.attack = attack;
        self.placement = placement;
        self.unplaced = era.ships();
        self.computer_placed = false;
        info!("new {} game on a {}x{} grid", era.name(), self.grid_size, self.grid_size);
        self.notify();
    }

    /// Register a callback fired after every state change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut() + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Counter bumped on every state change, for callers that poll.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn notify(&mut self) {
        self.version += 1;
        for listener in self.listeners.iter_mut() {
            listener();
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Era of the game being played.
    pub fn era(&self) -> Era {
        self.era
    }

    /// Era selected for the next `new_game`.
    pub fn next_era(&self) -> Era {
        self.next_era
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_player(&self) -> Side {
        self.current_player
    }

    /// The player's own field.
    pub fn own_field(&self) -> &BattleField {
        &self.own
    }

    /// The computer's field, the one the player fires at.
    pub fn opponent_field(&self) -> &BattleField {
        &self.opponent
    }

    /// Ships the player still has to place.
    pub fn unplaced_ships(&self) -> &[Ship] {
        &self.unplaced
    }

    pub fn computer_placed(&self) -> bool {
        self.computer_placed
    }

    pub fn attack_kind(&self) -> AttackKind {
        self.attack.kind()
    }

    pub fn placement_kind(&self) -> PlacementKind {
        self.placement.kind()
    }

    /// Select the era used by the next `new_game`. The running game keeps
    /// its fleets.
    pub fn set_period(&mut self, era: Era) {
        self.next_era = era;
    }

    /// Switch the computer attack strategy by name. Unknown names leave the
    /// current strategy in place and return `false`.
    pub fn set_strategy(&mut self, name: &str) -> bool {
        match AttackKind::from_name(name) {
            Some(kind) => {
                self.attack = kind.build();
                true
            }
            None => {
                warn!("unknown attack strategy {:?}", name);
                false
            }
        }
    }

    /// `true` once either fleet is sunk. Always `false` during placement.
    pub fn won(&self) -> bool {
        self.phase == Phase::InGame && (self.own.won() || self.opponent.won())
    }

    /// Side that sank the other fleet, if the game is over.
    pub fn winner(&self) -> Option<Side> {
        if self.phase != Phase::InGame {
            None
        } else if self.opponent.won() {
            Some(Side::Player)
        } else if self.own.won() {
            Some(Side::Computer)
        } else {
            None
        }
    }

    /// Rotate the unplaced ship at `index`. Returns `false` for a bad index.
    pub fn change_ship_orientation(&mut self, index: usize) -> bool {
        match self.unplaced.get_mut(index) {
            Some(ship) => {
                ship.change_orientation();
                self.notify();
                true
            }
            None => false,
        }
    }

    /// Place the unplaced ship at `index` with its origin at `(x, y)` on the
    /// player's field. Overlaps and out-of-field positions return `false`
    /// and leave the roster untouched.
    pub fn place_ship(&mut self, index: usize, x: i32, y: i32) -> bool {
        if self.phase != Phase::Placement {
            return false;
        }
        let Some(ship) = self.unplaced.get_mut(index) else {
            return false;
        };
        ship.set_position(x, y);
        match self.own.place_ship(ship) {
            Ok(true) => {
                let ship = self.unplaced.remove(index);
                debug!("player placed {} at ({}, {})", ship, x, y);
                self.notify();
                self.try_start();
                true
            }
            Ok(false) => false,
            Err(e) => {
                warn!("Impossible to place the ship: {}", e);
                false
            }
        }
    }

    /// Place every remaining player ship with the active placement strategy.
    /// Ships that could be placed leave the roster even if a later one fails.
    pub fn place_remaining_randomly(&mut self) -> Result<(), PlacementError> {
        if self.phase != Phase::Placement {
            return Ok(());
        }
        let mut result = Ok(());
        while let Some(ship) = self.unplaced.first().cloned() {
            if let Err(e) = self
                .placement
                .place_ships(&mut self.rng, &mut self.own, alloc::vec![ship])
            {
                result = Err(e);
                break;
            }
            self.unplaced.remove(0);
        }
        self.notify();
        self.try_start();
        result
    }

    /// Run the computer placement once. Later calls are no-ops.
    ///
    /// Every pass starts from an empty computer field; a failed pass leaves
    /// its partial placement in place until the next attempt.
    pub fn place_ships_computer(&mut self) -> Result<(), PlacementError> {
        if self.computer_placed {
            return Ok(());
        }
        self.opponent = BattleField::new(self.grid_size);
        let roster = self.era.ships();
        if let Err(e) = self
            .placement
            .place_ships(&mut self.rng, &mut self.opponent, roster)
        {
            warn!("The computer can no longer place ships: {}", e);
            return Err(e);
        }
        self.computer_placed = true;
        debug!("computer placed {} ships", self.opponent.ships().len());
        self.notify();
        self.try_start();
        Ok(())
    }

    fn try_start(&mut self) {
        if self.phase == Phase::Placement && self.unplaced.is_empty() && self.computer_placed {
            self.phase = Phase::InGame;
            self.current_player = Side::Player;
            info!("all ships placed, game starts");
            self.notify();
        }
    }

    /// Player fires at `(x, y)` on the computer's field. Unless that shot
    /// wins, the computer answers with exactly one shot.
    ///
    /// Returns `true` on a hit. Shots outside the field, out of turn, before
    /// the game starts or after it is won return `false` and change nothing.
    pub fn shot(&mut self, x: i32, y: i32) -> bool {
        if self.phase != Phase::InGame || self.won() {
            return false;
        }
        if self.current_player != Side::Player {
            warn!("shot at ({}, {}) ignored, waiting on the computer", x, y);
            return false;
        }
        let hit = match self.opponent.receive_shot(x, y) {
            Ok(hit) => hit,
            Err(e) => {
                warn!("Shooting out of battlefield: {}", e);
                return false;
            }
        };
        debug!("player fires at ({}, {}): {}", x, y, if hit { "hit" } else { "miss" });
        if !self.won() {
            self.end_turn();
        } else {
            info!("player wins");
        }
        self.notify();
        hit
    }

    fn end_turn(&mut self) {
        match self.current_player {
            Side::Computer => self.current_player = Side::Player,
            Side::Player => {
                self.current_player = Side::Computer;
                self.fire_computer();
            }
        }
    }

    /// Returns `true` if the computer actually fired.
    fn fire_computer(&mut self) -> bool {
        if self.won() {
            return false;
        }
        match self.attack.shoot(&mut self.rng, &mut self.own) {
            Ok(_) if self.won() => info!("computer wins"),
            Ok(_) => self.current_player = Side::Player,
            Err(e) => {
                warn!("Computer error when shooting: {}", e);
                return false;
            }
        }
        true
    }

    /// Let the computer take a turn it still owes, e.g. after its strategy
    /// failed. Returns `false` when it is not the computer's turn or its
    /// strategy failed again; the turn is then still owed.
    pub fn computer_turn(&mut self) -> bool {
        if self.phase != Phase::InGame || self.current_player != Side::Computer || self.won() {
            return false;
        }
        let fired = self.fire_computer();
        if fired {
            self.notify();
        }
        fired
    }

    /// Whether the player's cell `(x, y)` has been shot. `false` off-field.
    pub fn own_touched(&self, x: i32, y: i32) -> bool {
        self.own.touched(x, y).unwrap_or_else(|e| {
            warn!("Checking if own cell touched: {}", e);
            false
        })
    }

    /// Whether the computer's cell `(x, y)` has been shot. `false` off-field.
    pub fn opponent_touched(&self, x: i32, y: i32) -> bool {
        self.opponent.touched(x, y).unwrap_or_else(|e| {
            warn!("Checking if opponent cell touched: {}", e);
            false
        })
    }

    /// The player's ship at `(x, y)`, if any. `None` off-field.
    pub fn own_ship(&self, x: i32, y: i32) -> Option<&Ship> {
        self.own.ship_at(x, y).unwrap_or_else(|e| {
            warn!("Searching own ship: {}", e);
            None
        })
    }

    /// The computer's ship at `(x, y)`, if any. `None` off-field.
    pub fn opponent_ship(&self, x: i32, y: i32) -> Option<&Ship> {
        self.opponent.ship_at(x, y).unwrap_or_else(|e| {
            warn!("Searching opponent ship: {}", e);
            None
        })
    }

    /// Detached copy of the persistent state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid_size: self.grid_size,
            era: self.era,
            phase: self.phase,
            current_player: self.current_player,
            own: self.own.clone(),
            opponent: self.opponent.clone(),
            attack: self.attack.kind(),
            placement: self.placement.kind(),
            unplaced: self.unplaced.clone(),
            computer_placed: self.computer_placed,
        }
    }

    /// Replace the whole game state with `snapshot`. Listeners and the RNG
    /// are kept.
    pub fn restore(&mut self, snapshot: GameSnapshot) {
        self.grid_size = snapshot.grid_size;
        self.era = snapshot.era;
        self.next_era = snapshot.era;
        self.phase = snapshot.phase;
        self.current_player = snapshot.current_player;
        self.own = snapshot.own;
        self.opponent = snapshot.opponent;
        self.attack = snapshot.attack.build();
        self.placement = snapshot.placement.build();
        self.unplaced = snapshot.unplaced;
        self.computer_placed = snapshot.computer_placed;
        self.notify();
    }

    /// Build a new engine from `snapshot`.
    pub fn from_snapshot(snapshot: GameSnapshot, seed: Option<u64>) -> Self {
        let config = GameConfig {
            grid_size: snapshot.grid_size,
            era: snapshot.era,
            attack: snapshot.attack,
            placement: snapshot.placement,
            seed,
        };
        let mut engine = Self::new(config);
        engine.restore(snapshot);
        engine.version = 0;
        engine
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(feature = "std")]
fn entropy_rng() -> SmallRng {
    let mut seed_rng = rand::rng();
    SmallRng::from_rng(&mut seed_rng)
}

#[cfg(not(feature = "std"))]
fn entropy_rng() -> SmallRng {
    SmallRng::seed_from_u64(0x5EA_BA77_1E)
}
