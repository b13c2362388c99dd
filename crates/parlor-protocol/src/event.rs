//! The event stream vocabulary.
//!
//! Every change to a room happens in response to exactly one [`Event`]
//! popped from that room's queue — whether the event came from a client
//! over the transport or from the room's own timer. Events are immutable
//! values: ownership moves into the queue on push and to the handler on
//! pop.

use serde::{Deserialize, Serialize};

use crate::{ClientId, RoomId};

/// A single unit of input to a room.
///
/// `StartNewRound` and `EndRound` are normally self-scheduled by the room
/// itself; the remaining variants originate from clients. The
/// `ClientChange*` variants belong to the client registry and are carried
/// on the same stream only so the registry and the rooms share one
/// delivery path — rooms ignore them.
///
/// Internally tagged (`{"type": "PlayerInput", ...}`) to match what the
/// transport layer decodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Begin a fresh round in the addressed room.
    StartNewRound { room_id: RoomId },

    /// Close the currently running round in the addressed room.
    EndRound { room_id: RoomId },

    /// A client entered a room. Broadcast to every room so the others
    /// can drop the client from their active membership.
    PlayerJoinRoom { room_id: RoomId, client_id: ClientId },

    /// A guess submitted by a client.
    PlayerInput {
        room_id: RoomId,
        client_id: ClientId,
        text: String,
    },

    /// Client registry traffic — not addressed to any room.
    ClientChangeName { client_id: ClientId, name: String },

    /// Client registry traffic — not addressed to any room.
    ClientChangeColor { client_id: ClientId, color: String },
}

impl Event {
    /// The room this event is addressed to, if any.
    ///
    /// Registry events carry no room address and return `None`.
    pub fn room_id(&self) -> Option<RoomId> {
        match self {
            Event::StartNewRound { room_id }
            | Event::EndRound { room_id }
            | Event::PlayerJoinRoom { room_id, .. }
            | Event::PlayerInput { room_id, .. } => Some(*room_id),
            Event::ClientChangeName { .. } | Event::ClientChangeColor { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_is_internally_tagged() {
        let event = Event::PlayerInput {
            room_id: RoomId(1),
            client_id: ClientId(7),
            text: "cat".into(),
        };
        let json: serde_json::Value = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "PlayerInput");
        assert_eq!(json["room_id"], 1);
        assert_eq!(json["client_id"], 7);
        assert_eq!(json["text"], "cat");
    }

    #[test]
    fn test_event_decodes_from_transport_json() {
        let json = r#"{"type": "PlayerJoinRoom", "room_id": 2, "client_id": 9}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(
            event,
            Event::PlayerJoinRoom {
                room_id: RoomId(2),
                client_id: ClientId(9),
            }
        );
    }

    #[test]
    fn test_decode_unknown_kind_returns_error() {
        // Unknown kinds die at the transport boundary, not inside a room.
        let json = r#"{"type": "TeleportPlayer", "room_id": 1}"#;
        let result: Result<Event, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_room_id_helper() {
        assert_eq!(
            Event::StartNewRound { room_id: RoomId(4) }.room_id(),
            Some(RoomId(4))
        );
        assert_eq!(
            Event::ClientChangeName {
                client_id: ClientId(1),
                name: "ada".into(),
            }
            .room_id(),
            None
        );
    }
}
