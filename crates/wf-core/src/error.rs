use crate::entity::{RoomId, ThingId};

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when constructing or mutating a world.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// A reference names a thing id that is not defined.
    #[error("unknown thing: {0}")]
    UnknownThing(ThingId),

    /// A reference names a room id that is not defined.
    #[error("unknown room: {0}")]
    UnknownRoom(RoomId),

    /// Two things were defined with the same id.
    #[error("duplicate thing id: {0}")]
    DuplicateThing(ThingId),

    /// Two rooms were defined with the same id.
    #[error("duplicate room id: {0}")]
    DuplicateRoom(RoomId),

    /// A thing appears in more than one room or in a room and the inventory.
    #[error("thing {0} is placed more than once")]
    AlreadyPlaced(ThingId),

    /// The thing is not in the named room, so it cannot be picked up there.
    #[error("thing {thing} is not in room {room}")]
    ThingNotInRoom {
        /// The thing that was asked for.
        thing: ThingId,
        /// The room it was expected in.
        room: RoomId,
    },

    /// The thing is not in the player's inventory, so it cannot be dropped.
    #[error("thing {0} is not carried")]
    ThingNotCarried(ThingId),

    /// A world must have at least one room for the player to stand in.
    #[error("a world needs at least one room")]
    NoRooms,
}
