//! Event router: room registry plus fan-out dispatch.
//!
//! Cross-room effects (a client switching rooms) propagate only through
//! events broadcast to every room — never through shared state. The
//! router makes that broadcast explicit: `PlayerJoinRoom` goes to all
//! rooms, everything room-addressed goes to exactly the room it names.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parlor_protocol::{Event, RoomId};
use parlor_room::{
    ItemGenerator, RoomConfig, RoomError, RoomHandle, RoomSnapshot, spawn_room,
};

/// Counter for generating unique room ids.
static NEXT_ROOM_ID: AtomicU64 = AtomicU64::new(1);

/// Creates, tracks, and dispatches events to rooms.
///
/// This is the entry point for everything above the room layer (session
/// handlers, an admin surface). Each created room runs its own actor;
/// the router only holds handles.
pub struct RoomRouter {
    rooms: HashMap<RoomId, RoomHandle>,
}

impl RoomRouter {
    /// An empty router.
    pub fn new() -> Self {
        Self {
            rooms: HashMap::new(),
        }
    }

    /// Spawns a new room actor and registers it. Returns its id.
    pub fn create_room(
        &mut self,
        name: impl Into<String>,
        config: RoomConfig,
        generator: Box<dyn ItemGenerator>,
    ) -> RoomId {
        let room_id = RoomId(NEXT_ROOM_ID.fetch_add(1, Ordering::Relaxed));
        let handle = spawn_room(room_id, name, config, generator);
        self.rooms.insert(room_id, handle);
        tracing::info!(%room_id, "room created");
        room_id
    }

    /// Dispatches one event.
    ///
    /// - `PlayerJoinRoom` is fanned out to every room: the addressed room
    ///   admits the client, the others deactivate any stale membership.
    /// - Other room-addressed events go to exactly the room they name.
    /// - Client registry events have no room to go to and are dropped
    ///   here (the registry is outside this layer).
    pub fn submit(&self, event: Event) -> Result<(), RoomError> {
        if matches!(event, Event::PlayerJoinRoom { .. }) {
            for handle in self.rooms.values() {
                handle.submit(event.clone());
            }
            return Ok(());
        }

        match event.room_id() {
            Some(room_id) => {
                let handle = self
                    .rooms
                    .get(&room_id)
                    .ok_or(RoomError::NotFound(room_id))?;
                handle.submit(event);
                Ok(())
            }
            None => {
                tracing::debug!("client registry event, not delivered to rooms");
                Ok(())
            }
        }
    }

    /// Requests a snapshot of one room.
    pub async fn snapshot(&self, room_id: RoomId) -> Result<RoomSnapshot, RoomError> {
        let handle = self
            .rooms
            .get(&room_id)
            .ok_or(RoomError::NotFound(room_id))?;
        handle.snapshot().await
    }

    /// Shuts a room down and removes it from the registry.
    pub async fn destroy_room(&mut self, room_id: RoomId) -> Result<(), RoomError> {
        let handle = self
            .rooms
            .remove(&room_id)
            .ok_or(RoomError::NotFound(room_id))?;
        let _ = handle.shutdown().await;
        tracing::info!(%room_id, "room destroyed");
        Ok(())
    }

    /// Number of registered rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Ids of all registered rooms.
    pub fn room_ids(&self) -> Vec<RoomId> {
        self.rooms.keys().copied().collect()
    }
}

impl Default for RoomRouter {
    fn default() -> Self {
        Self::new()
    }
}
