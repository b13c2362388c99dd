//! # Parlor
//!
//! Round-lifecycle engine for multiplayer guessing-game rooms.
//!
//! Each room is an isolated actor fed by a single serialized event
//! stream: clients join, submit guesses against a pool of generated
//! items, and the room alternates between an open round and a cooldown
//! on its own timer — all through the same queue, in true arrival order.
//!
//! The [`RoomRouter`] is the process-wide entry point: it creates rooms,
//! routes room-addressed events, and fans `PlayerJoinRoom` out to every
//! room so stale membership gets deactivated.
//!
//! ## Quick start
//!
//! ```no_run
//! use parlor::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut router = RoomRouter::new();
//!     let room_id = router.create_room(
//!         "den",
//!         RoomConfig::default(),
//!         Box::new(ScrambleGenerator::with_default_bank()),
//!     );
//!
//!     router.submit(Event::StartNewRound { room_id }).unwrap();
//!     router
//!         .submit(Event::PlayerJoinRoom { room_id, client_id: ClientId(1) })
//!         .unwrap();
//! }
//! ```

mod router;

pub use router::RoomRouter;

/// Everything a game server needs in one import.
pub mod prelude {
    pub use parlor_protocol::{ClientId, Event, Item, RoomId};
    pub use parlor_queue::EventQueue;
    pub use parlor_room::{
        ItemGenerator, PlayerInfo, RoomConfig, RoomError, RoomHandle, RoomPhase, RoomSnapshot,
        ScrambleGenerator,
    };
    pub use parlor_timer::TimerSlot;

    pub use crate::RoomRouter;
}
