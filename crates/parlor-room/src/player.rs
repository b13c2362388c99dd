//! Player membership and scoring.

use parlor_protocol::ClientId;
use serde::{Deserialize, Serialize};

/// Points for any correct guess, before the length bonus.
pub const BASE_AWARD: f32 = 3.0;

/// Additional points per character of the solved answer.
pub const PER_CHAR_AWARD: f32 = 0.2;

/// Points removed for a wrong guess.
pub const WRONG_PENALTY: f32 = 1.0;

/// One member of a room.
///
/// `active` tracks whether the client is still playing here; it flips to
/// `false` when the client joins a different room, and the entry is
/// pruned at the next round start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub client_id: ClientId,
    pub score: f32,
    pub active: bool,
}

impl PlayerInfo {
    /// A freshly joined player: active, score zero.
    pub fn new(client_id: ClientId) -> Self {
        Self {
            client_id,
            score: 0.0,
            active: true,
        }
    }

    /// Credit a correct guess: flat base plus a per-character bonus on
    /// the solved answer's length.
    pub fn award(&mut self, answer_len: usize) {
        self.score += BASE_AWARD + PER_CHAR_AWARD * answer_len as f32;
    }

    /// Debit a wrong guess. Scores never drop below zero.
    pub fn penalize(&mut self) {
        self.score = (self.score - WRONG_PENALTY).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_scales_with_answer_length() {
        let mut player = PlayerInfo::new(ClientId(1));
        player.award(3);
        assert!((player.score - 3.6).abs() < 1e-5);
        player.award(5);
        assert!((player.score - 7.6).abs() < 1e-5);
    }

    #[test]
    fn test_penalize_clamps_at_zero() {
        let mut player = PlayerInfo::new(ClientId(1));
        player.penalize();
        assert_eq!(player.score, 0.0);

        player.award(3); // 3.6
        player.penalize();
        assert!((player.score - 2.6).abs() < 1e-5);
    }
}
