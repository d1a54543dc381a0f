//! Core types for Wayfarer: things, rooms, the player, and the session.
//!
//! This crate defines the world model and the command interpreter over it.
//! It knows nothing about files or terminals: a [`World`] can be built
//! programmatically and a [`Session`] driven with plain strings, which is
//! exactly what the test suites do.

/// Command parsing for player input.
pub mod command;
/// Rendering of `look` output.
pub mod describe;
/// Things, rooms, exits, the player, and their identifiers.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// The interactive session and its fixed response strings.
pub mod session;
/// The world model that owns all entities and guards placement.
pub mod world;

/// Re-export command types.
pub use command::{Command, parse_command};
/// Re-export description types.
pub use describe::{Subject, describe};
/// Re-export core entity types.
pub use entity::{Exit, Lock, Player, PlayerId, Room, RoomId, Thing, ThingId};
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export session types.
pub use session::{Session, Status};
/// Re-export the world model.
pub use world::World;
