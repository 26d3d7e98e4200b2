//! Note domain model.
//!
//! # Responsibility
//! - Define the record shape stored in the persisted JSON collection.
//! - Provide validation used by every persistence write and read path.
//!
//! # Invariants
//! - `id` is a positive integer and never changes after creation.
//! - The serialized shape is exactly `{"id", "title", "description"}`; there
//!   is no versioning field.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable numeric identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// A single numeric type is used end-to-end; ids never travel as strings.
pub type NoteId = i64;

/// Validation failure for a note record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Note ids start at 1; zero and negative values are never assigned.
    NonPositiveId(NoteId),
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveId(id) => write!(f, "note id must be positive, got {id}"),
        }
    }
}

impl Error for NoteValidationError {}

/// A user-authored note.
///
/// Title and description carry no length or content constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Positive integer, unique within the stored collection.
    pub id: NoteId,
    /// Short heading shown in list views.
    pub title: String,
    /// Free-form body text.
    pub description: String,
}

impl Note {
    /// Creates a note with a caller-assigned id.
    ///
    /// Id assignment is owned by the store; this constructor does not check
    /// uniqueness against any collection.
    pub fn new(id: NoteId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Checks record-level invariants.
    ///
    /// Write paths must validate before persisting; read paths must reject
    /// invalid persisted state instead of masking it.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.id < 1 {
            return Err(NoteValidationError::NonPositiveId(self.id));
        }
        Ok(())
    }
}

/// Returns the fixed collection written on first run.
///
/// Ids and titles are stable contract values; tests and returning users rely
/// on them.
pub fn seed_notes() -> Vec<Note> {
    vec![
        Note::new(
            1,
            "Add a new note:",
            "Run `jotpad add <title> [description]` to create a note",
        ),
        Note::new(
            2,
            "Delete this note:",
            "Run `jotpad delete 2` to remove this note",
        ),
        Note::new(
            3,
            "Edit this note:",
            "Run `jotpad edit 3 --title <new title>` to change this note",
        ),
    ]
}
