//! Boundary types for Parlor.
//!
//! This crate defines the "language" spoken between the transport layer
//! that delivers client traffic and the rooms that consume it: identity
//! newtypes, the [`Event`] enum that drives every room, and the [`Item`]
//! struct for guessable units.
//!
//! Everything here is a plain value type — no behavior beyond
//! construction and inspection, so the crate stays dependency-light and
//! every layer can use it.

mod event;
mod ids;
mod item;

pub use event::Event;
pub use ids::{ClientId, RoomId};
pub use item::Item;
