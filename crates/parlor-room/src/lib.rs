//! Room lifecycle for Parlor.
//!
//! Each room runs as an isolated Tokio task (actor model) owning its own
//! event queue, timer slot, item pool, and player list. All gameplay
//! mutation flows through a single serialized event stream; the actor is
//! the one consumer, so room state needs no internal locking.
//!
//! # Key types
//!
//! - [`Room`] — the state machine: rounds, membership, scoring
//! - [`RoomHandle`] — submit events to a running room actor
//! - [`RoomConfig`] / [`RoomPhase`] — settings and the round cycle
//! - [`ItemGenerator`] — the injected item-producing strategy

mod config;
mod error;
mod generate;
mod player;
mod room;

pub use config::{RoomConfig, RoomPhase};
pub use error::RoomError;
pub use generate::{ItemGenerator, ScrambleGenerator};
pub use player::{BASE_AWARD, PER_CHAR_AWARD, PlayerInfo, WRONG_PENALTY};
pub use room::{Room, RoomHandle, RoomSnapshot, spawn_room};
