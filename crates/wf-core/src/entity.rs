use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a thing. Thing ids live in their own namespace,
/// separate from room and player ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThingId(pub u32);

impl fmt::Display for ThingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Unique identifier for a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub u32);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier carried by the player. Never used for lookups; it exists so
/// that saved worlds round-trip the id they were written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A portable object the player can pick up, carry, and drop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thing {
    /// Unique identifier for this thing.
    pub id: ThingId,
    /// Display name, matched verbatim against command nouns.
    pub name: String,
    /// Free-text description shown by `look <name>`.
    pub description: String,
}

impl Thing {
    /// Create a thing with an empty description.
    pub fn new(id: ThingId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A key requirement on an exit: the player must carry `key` to pass,
/// otherwise `message` is shown instead of moving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lock {
    /// The thing the player must be carrying.
    pub key: ThingId,
    /// Refusal text shown when the key is missing.
    pub message: String,
}

/// A one-way connection from the room that owns it to another room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exit {
    /// Display name, matched verbatim against `go` nouns.
    pub name: String,
    /// The room this exit leads to.
    pub destination: RoomId,
    /// Optional key requirement guarding the exit.
    pub lock: Option<Lock>,
}

impl Exit {
    /// Create an open exit with no key requirement.
    pub fn new(name: impl Into<String>, destination: RoomId) -> Self {
        Self {
            name: name.into(),
            destination,
            lock: None,
        }
    }

    /// Guard the exit with a key and a refusal message.
    pub fn with_key(mut self, key: ThingId, message: impl Into<String>) -> Self {
        self.lock = Some(Lock {
            key,
            message: message.into(),
        });
        self
    }
}

/// A location in the world. Rooms own their contents and their exits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for this room.
    pub id: RoomId,
    /// Display name, shown as the first line of the room description.
    pub name: String,
    /// Free-text description shown by `look`.
    pub description: String,
    /// Things lying in this room, in pickup order.
    pub contents: Vec<ThingId>,
    /// Exits leading out of this room, in declaration order.
    pub exits: Vec<Exit>,
}

impl Room {
    /// Create an empty room with no description, contents, or exits.
    pub fn new(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            contents: Vec::new(),
            exits: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Place a thing in the room.
    pub fn with_thing(mut self, thing: ThingId) -> Self {
        self.contents.push(thing);
        self
    }

    /// Add an exit leading out of the room.
    pub fn with_exit(mut self, exit: Exit) -> Self {
        self.exits.push(exit);
        self
    }
}

/// The player: a name, a description, carried things, and a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Identifier preserved for serialization.
    pub id: PlayerId,
    /// Display name, shown as the first line of `look me`.
    pub name: String,
    /// Free-text self-description.
    pub description: String,
    /// Things the player carries, in pickup order.
    pub inventory: Vec<ThingId>,
    /// The room the player is currently in.
    pub location: RoomId,
}

impl Player {
    /// Create a player with an empty description and inventory.
    pub fn new(id: PlayerId, name: impl Into<String>, location: RoomId) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            inventory: Vec::new(),
            location,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Put a thing in the player's hands.
    pub fn with_thing(mut self, thing: ThingId) -> Self {
        self.inventory.push(thing);
        self
    }
}
