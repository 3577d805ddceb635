#![cfg(feature = "std")]

//! Saving and loading games through a keyed snapshot store.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::SNAPSHOT_VERSION;
use crate::game::{GameEngine, GameSnapshot};

/// On-disk envelope carrying the snapshot format version.
#[derive(Serialize, Deserialize)]
struct SavedGame {
    version: u8,
    snapshot: GameSnapshot,
}

/// Encode `snapshot` into the versioned binary format.
pub fn encode(snapshot: &GameSnapshot) -> anyhow::Result<Vec<u8>> {
    let saved = SavedGame {
        version: SNAPSHOT_VERSION,
        snapshot: snapshot.clone(),
    };
    Ok(bincode::serialize(&saved)?)
}

/// Decode bytes produced by [`encode`].
pub fn decode(bytes: &[u8]) -> anyhow::Result<GameSnapshot> {
    let saved: SavedGame = bincode::deserialize(bytes).context("corrupt saved game")?;
    if saved.version != SNAPSHOT_VERSION {
        return Err(anyhow!(
            "Saved game version mismatch: expected {}, got {}",
            SNAPSHOT_VERSION,
            saved.version
        ));
    }
    Ok(saved.snapshot)
}

/// External store of snapshots keyed by an opaque identifier.
pub trait SnapshotStore {
    fn save(&mut self, id: &str, snapshot: &GameSnapshot) -> anyhow::Result<()>;
    fn load(&self, id: &str) -> anyhow::Result<GameSnapshot>;
}

/// One file per identifier under a root directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `id`.
    pub fn path(&self, id: &str) -> PathBuf {
        self.root.join(id)
    }
}

impl SnapshotStore for FileStore {
    fn save(&mut self, id: &str, snapshot: &GameSnapshot) -> anyhow::Result<()> {
        let path = self.path(id);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&path, encode(snapshot)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn load(&self, id: &str) -> anyhow::Result<GameSnapshot> {
        let path = self.path(id);
        let bytes = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
        decode(&bytes).with_context(|| format!("loading {}", path.display()))
    }
}

/// In-process store, encoded the same way as [`FileStore`].
#[derive(Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, id: &str, snapshot: &GameSnapshot) -> anyhow::Result<()> {
        self.entries.insert(id.to_string(), encode(snapshot)?);
        Ok(())
    }

    fn load(&self, id: &str) -> anyhow::Result<GameSnapshot> {
        let bytes = self
            .entries
            .get(id)
            .ok_or_else(|| anyhow!("no saved game named {:?}", id))?;
        decode(bytes)
    }
}

impl GameEngine {
    /// Save the whole game under `id`.
    pub fn save(&self, store: &mut dyn SnapshotStore, id: &str) -> anyhow::Result<()> {
        store.save(id, &self.snapshot())?;
        info!("game saved as {:?}", id);
        Ok(())
    }

    /// Replace the current game with the one saved under `id`. On error the
    /// current game is left untouched.
    pub fn load(&mut self, store: &dyn SnapshotStore, id: &str) -> anyhow::Result<()> {
        let snapshot = store.load(id)?;
        self.restore(snapshot);
        info!("game {:?} loaded", id);
        Ok(())
    }
}
