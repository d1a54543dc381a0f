use std::collections::{HashMap, HashSet};

use crate::entity::{Player, Room, RoomId, Thing, ThingId};
use crate::error::{WorldError, WorldResult};

/// The world model. Owns every thing, every room, and the player, and
/// guards the placement invariant: a thing sits in at most one container
/// (one room's floor or the player's hands) at a time.
#[derive(Debug, Clone)]
pub struct World {
    things: Vec<Thing>,
    rooms: Vec<Room>,
    player: Player,

    // Indexes
    thing_index: HashMap<ThingId, usize>,
    room_index: HashMap<RoomId, usize>,
}

impl World {
    /// Assemble a world from its parts, validating every cross-reference.
    ///
    /// Rejects duplicate thing or room ids, references to undefined things
    /// or rooms (in contents, inventories, exits, and locks), things placed
    /// in more than one container, and a world without rooms. A `World`
    /// that exists is internally consistent.
    pub fn new(things: Vec<Thing>, rooms: Vec<Room>, player: Player) -> WorldResult<Self> {
        if rooms.is_empty() {
            return Err(WorldError::NoRooms);
        }

        let mut thing_index = HashMap::new();
        for (idx, thing) in things.iter().enumerate() {
            if thing_index.insert(thing.id, idx).is_some() {
                return Err(WorldError::DuplicateThing(thing.id));
            }
        }
        let mut room_index = HashMap::new();
        for (idx, room) in rooms.iter().enumerate() {
            if room_index.insert(room.id, idx).is_some() {
                return Err(WorldError::DuplicateRoom(room.id));
            }
        }

        let mut placed = HashSet::new();
        for room in &rooms {
            for &thing in &room.contents {
                if !thing_index.contains_key(&thing) {
                    return Err(WorldError::UnknownThing(thing));
                }
                if !placed.insert(thing) {
                    return Err(WorldError::AlreadyPlaced(thing));
                }
            }
            for exit in &room.exits {
                if !room_index.contains_key(&exit.destination) {
                    return Err(WorldError::UnknownRoom(exit.destination));
                }
                if let Some(lock) = &exit.lock {
                    if !thing_index.contains_key(&lock.key) {
                        return Err(WorldError::UnknownThing(lock.key));
                    }
                }
            }
        }
        for &thing in &player.inventory {
            if !thing_index.contains_key(&thing) {
                return Err(WorldError::UnknownThing(thing));
            }
            if !placed.insert(thing) {
                return Err(WorldError::AlreadyPlaced(thing));
            }
        }
        if !room_index.contains_key(&player.location) {
            return Err(WorldError::UnknownRoom(player.location));
        }

        Ok(Self {
            things,
            rooms,
            player,
            thing_index,
            room_index,
        })
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Get a thing by id.
    pub fn thing(&self, id: ThingId) -> Option<&Thing> {
        self.thing_index.get(&id).map(|&idx| &self.things[idx])
    }

    /// Get a room by id.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.room_index.get(&id).map(|&idx| &self.rooms[idx])
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// All things, in definition order.
    pub fn things(&self) -> &[Thing] {
        &self.things
    }

    /// All rooms, in definition order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The room the player is standing in.
    pub fn current_room(&self) -> Option<&Room> {
        self.room(self.player.location)
    }

    // -----------------------------------------------------------------------
    // Name lookup
    // -----------------------------------------------------------------------

    /// Find a thing in a room's contents by exact name. When several things
    /// share the name, the one placed earliest wins.
    pub fn find_in_contents(&self, room: RoomId, name: &str) -> Option<ThingId> {
        let room = self.room(room)?;
        room.contents
            .iter()
            .copied()
            .find(|&id| self.thing(id).is_some_and(|t| t.name == name))
    }

    /// Find a thing in the player's inventory by exact name. When several
    /// things share the name, the one picked up earliest wins.
    pub fn find_in_inventory(&self, name: &str) -> Option<ThingId> {
        self.player
            .inventory
            .iter()
            .copied()
            .find(|&id| self.thing(id).is_some_and(|t| t.name == name))
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Move a thing from the current room's floor into the inventory.
    /// The thing goes to the end of the inventory.
    pub fn take(&mut self, thing: ThingId) -> WorldResult<()> {
        let room_id = self.player.location;
        let idx = *self
            .room_index
            .get(&room_id)
            .ok_or(WorldError::UnknownRoom(room_id))?;
        let room = &mut self.rooms[idx];
        let pos = room
            .contents
            .iter()
            .position(|&id| id == thing)
            .ok_or(WorldError::ThingNotInRoom {
                thing,
                room: room_id,
            })?;
        room.contents.remove(pos);
        self.player.inventory.push(thing);
        Ok(())
    }

    /// Move a thing from the inventory onto the current room's floor.
    /// The thing goes to the end of the room's contents.
    pub fn put_down(&mut self, thing: ThingId) -> WorldResult<()> {
        let pos = self
            .player
            .inventory
            .iter()
            .position(|&id| id == thing)
            .ok_or(WorldError::ThingNotCarried(thing))?;
        let room_id = self.player.location;
        let idx = *self
            .room_index
            .get(&room_id)
            .ok_or(WorldError::UnknownRoom(room_id))?;
        self.player.inventory.remove(pos);
        self.rooms[idx].contents.push(thing);
        Ok(())
    }

    /// Move the player to another room.
    pub fn move_player(&mut self, room: RoomId) -> WorldResult<()> {
        if !self.room_index.contains_key(&room) {
            return Err(WorldError::UnknownRoom(room));
        }
        self.player.location = room;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Placement
    // -----------------------------------------------------------------------

    /// Ids of all things sitting in some room or carried by the player, in
    /// serialization order: room by room, then the inventory.
    pub fn placed_things(&self) -> Vec<ThingId> {
        let mut placed: Vec<ThingId> = self
            .rooms
            .iter()
            .flat_map(|room| room.contents.iter().copied())
            .collect();
        placed.extend(self.player.inventory.iter().copied());
        placed
    }

    /// Things that are in no room and not carried. They are invisible to
    /// every command and are lost when the world is written out.
    pub fn unplaced_things(&self) -> Vec<&Thing> {
        let placed: HashSet<ThingId> = self.placed_things().into_iter().collect();
        self.things
            .iter()
            .filter(|thing| !placed.contains(&thing.id))
            .collect()
    }
}
