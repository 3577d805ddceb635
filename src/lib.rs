#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod attack;
mod common;
mod config;
mod factory;
mod field;
mod game;
mod mask;
mod placement;
mod ship;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod persistence;
pub mod prelude;
#[cfg(feature = "std")]
pub mod ui;

pub use attack::*;
pub use common::*;
pub use config::*;
pub use factory::*;
pub use field::*;
pub use game::*;
pub use mask::ShotMask;
pub use placement::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with, level_from_env, LOG_ENV};
#[cfg(feature = "std")]
pub use persistence::{FileStore, MemoryStore, SnapshotStore};
