//! Identity newtypes.
//!
//! Wrapping the raw `u64` means a `RoomId` can never be passed where a
//! `ClientId` is expected. `#[serde(transparent)]` keeps the JSON
//! representation a plain number, so `RoomId(3)` serializes as `3`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A unique identifier for a room (one independent game instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R-{}", self.0)
    }
}

/// A unique identifier for a connected client.
///
/// Assigned by the session layer; rooms only ever compare and store it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub u64);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C-{}", self.0)
    }
}
