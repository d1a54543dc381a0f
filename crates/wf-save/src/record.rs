//! Raw records parsed out of a save file, before references are resolved.
//!
//! Ids at this stage are plain numbers with source spans attached; turning
//! them into a consistent [`wf_core::World`] is the builder's job.

/// Source span as a byte range.
pub type Span = std::ops::Range<usize>;

/// A parsed value with its source location.
#[derive(Debug, Clone)]
pub struct Spanned<T> {
    /// The wrapped value.
    pub node: T,
    /// The byte range of this value in the source text.
    pub span: Span,
}

/// A `thing` record: header line plus one description line.
#[derive(Debug, Clone)]
pub struct ThingRecord {
    /// The declared id.
    pub id: Spanned<u32>,
    /// The thing's name (everything after the id on the header line).
    pub name: String,
    /// The description line, taken verbatim.
    pub description: String,
}

/// A `room` record: header, description, and a `contents` line.
#[derive(Debug, Clone)]
pub struct RoomRecord {
    /// The declared id.
    pub id: Spanned<u32>,
    /// The room's name.
    pub name: String,
    /// The description line, taken verbatim.
    pub description: String,
    /// Thing ids listed on the `contents` line.
    pub contents: Vec<Spanned<u32>>,
}

/// The `player` record: header, description, `inventory`, and `location`.
#[derive(Debug, Clone)]
pub struct PlayerRecord {
    /// The declared id.
    pub id: Spanned<u32>,
    /// The player's name.
    pub name: String,
    /// The description line, taken verbatim.
    pub description: String,
    /// Thing ids listed on the `inventory` line.
    pub inventory: Vec<Spanned<u32>>,
    /// The room id on the `location` line.
    pub location: Spanned<u32>,
}

/// An `exit` or `keyexit` record.
#[derive(Debug, Clone)]
pub struct ExitRecord {
    /// The room this exit belongs to.
    pub room: Spanned<u32>,
    /// The room this exit leads to.
    pub destination: Spanned<u32>,
    /// The exit's name (may be empty).
    pub name: String,
    /// The key requirement, present only for `keyexit` records.
    pub key: Option<KeyRecord>,
}

/// The second line of a `keyexit` record: a key id and the refusal text.
#[derive(Debug, Clone)]
pub struct KeyRecord {
    /// The thing the player must carry.
    pub thing: Spanned<u32>,
    /// Refusal text shown when the key is missing (may be empty).
    pub message: String,
}

/// A complete parsed save file in section order.
#[derive(Debug, Clone)]
pub struct SaveFile {
    /// All `thing` records, in file order.
    pub things: Vec<ThingRecord>,
    /// All `room` records, in file order.
    pub rooms: Vec<RoomRecord>,
    /// The single `player` record.
    pub player: PlayerRecord,
    /// All exit records, in file order.
    pub exits: Vec<ExitRecord>,
}
