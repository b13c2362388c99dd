//! Error types for the room layer.

use parlor_protocol::RoomId;

/// Errors surfaced by room handles and the router.
///
/// The event-handling core itself cannot fail — unusable input (wrong
/// room, unknown client, late guess) is ignored, not rejected. Errors
/// exist only at the handle surface.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// No room with this id is registered.
    #[error("room {0} not found")]
    NotFound(RoomId),

    /// The room's actor is gone (shut down or crashed).
    #[error("room {0} is unavailable")]
    Unavailable(RoomId),
}
