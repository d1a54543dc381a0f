//! Reading and writing the Wayfarer save format.
//!
//! A save file is plain text, one record element per line, four sections in
//! a fixed order:
//!
//! ```text
//! thing #1 brass key
//! Small and green with age.
//! room #1 cell
//! A damp stone cell.
//! contents #1
//! room #2 corridor
//! A torchlit corridor.
//! contents
//! player #1 prisoner
//! Bruised but unbroken.
//! inventory
//! location #1
//! keyexit #1 #2 door
//! #1 The door is locked.
//! exit #2 #1 back
//! ```
//!
//! Things and rooms come first, then exactly one player, then the exits,
//! terminated by the first blank line or the end of input. There is no
//! header and no version field.
//!
//! [`load`] turns text into a [`wf_core::World`] plus diagnostics;
//! [`encode`] is the inverse. The round trip is lossless for every thing
//! that sits in a room or the inventory; a thing placed nowhere is dropped
//! by `encode`, which is why loading one produces a warning, and a lock
//! keyed on a dropped thing leaves a reference the next load rejects.

pub mod builder;
pub mod diagnostics;
pub mod parser;
pub mod record;
pub mod writer;

use std::path::Path;

pub use builder::LoadResult;
pub use diagnostics::{Diagnostic, Severity, render_diagnostics};
pub use writer::{encode, save_file};

/// Load a world from save-file text.
///
/// The result carries the world only when nothing went wrong; parse errors
/// are fatal on their own, reference errors are collected and reported
/// together.
pub fn load(source: &str) -> LoadResult {
    match parser::parse(source) {
        Ok(save) => builder::build(&save),
        Err(diagnostic) => LoadResult {
            world: None,
            diagnostics: vec![diagnostic],
        },
    }
}

/// Load a world from a save file on disk.
///
/// A file that cannot be read is reported as a diagnostic, like any other
/// failed load.
pub fn load_file(path: &Path) -> LoadResult {
    match std::fs::read_to_string(path) {
        Ok(source) => load(&source),
        Err(e) => LoadResult {
            world: None,
            diagnostics: vec![Diagnostic::error(
                0..0,
                format!("cannot read {}: {e}", path.display()),
            )],
        },
    }
}
