//! Room configuration and the round-cycle phase machine.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

// ---------------------------------------------------------------------------
// RoomConfig
// ---------------------------------------------------------------------------

/// Configuration for a room instance. Set at construction, immutable
/// thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Number of items kept open for guessing. The pool holds exactly
    /// this many items at all times once a round has started.
    pub pool_size: usize,

    /// How long a round stays open for submissions.
    pub round_length: Duration,

    /// Cooldown between a round ending and the next one starting.
    /// May be zero (back-to-back rounds).
    pub time_between_rounds: Duration,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            pool_size: 6,
            round_length: Duration::from_secs(90),
            time_between_rounds: Duration::from_secs(20),
        }
    }
}

impl RoomConfig {
    /// Clamp and fix any out-of-range values so the config is safe to use.
    ///
    /// Called automatically when a room is constructed. Rules:
    /// - `pool_size` must be at least 1.
    /// - `round_length` must be non-zero.
    pub fn validated(mut self) -> Self {
        if self.pool_size == 0 {
            warn!("pool_size of 0 is not playable — clamping to 1");
            self.pool_size = 1;
        }
        if self.round_length.is_zero() {
            warn!("round_length of zero is not playable — clamping to 1s");
            self.round_length = Duration::from_secs(1);
        }
        self
    }
}

// ---------------------------------------------------------------------------
// RoomPhase
// ---------------------------------------------------------------------------

/// The round-cycle phase of a room.
///
/// ```text
/// Idle → RoundActive → Cooldown → RoundActive → …
/// ```
///
/// - **Idle**: the room exists but no round has ever started.
/// - **RoundActive**: a round is open; the pool accepts guesses.
/// - **Cooldown**: the round ended; waiting out `time_between_rounds`.
///
/// There is no terminal phase — the cycle repeats until the owner shuts
/// the room down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomPhase {
    Idle,
    RoundActive,
    Cooldown,
}

impl RoomPhase {
    /// Returns `true` if a round is currently open for guesses.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::RoundActive)
    }
}

impl std::fmt::Display for RoomPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::RoundActive => write!(f, "RoundActive"),
            Self::Cooldown => write!(f, "Cooldown"),
        }
    }
}
