//! Note store contract and key-value implementation.
//!
//! # Responsibility
//! - Sole authority over reading, writing, and mutating the persisted note
//!   collection.
//! - Keep the stored representation a single JSON array under one fixed key.
//!
//! # Invariants
//! - Every operation is one synchronous read-modify-write of the whole
//!   collection; no operation observes a partially-written collection.
//! - Note ids are unique within the collection at all times.
//! - Insertion order is preserved; new notes append at the end.
//! - A read or parse fault aborts the operation before anything is written.

use crate::db::{kv_get, kv_put, DbError};
use crate::model::note::{seed_notes, Note, NoteId, NoteValidationError};
use rusqlite::Connection;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key holding the entire serialized note collection.
pub const NOTES_KEY: &str = "notes";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for note store persistence and query operations.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying storage access failed while reading.
    Read(DbError),
    /// Underlying storage access failed while writing. Carries the
    /// caller-supplied context describing which mutation was lost.
    Write {
        context: &'static str,
        source: DbError,
    },
    /// The stored value is not a valid JSON note collection.
    Parse(serde_json::Error),
    /// A record violates note invariants (in memory or persisted).
    Validation(NoteValidationError),
    /// The collection contains the same id more than once.
    DuplicateId(NoteId),
    /// No note with the requested id exists.
    NotFound(NoteId),
    /// The connection was not bootstrapped through `open_store`.
    MissingRequiredTable(&'static str),
}

impl StoreError {
    fn read(err: rusqlite::Error) -> Self {
        Self::Read(DbError::Sqlite(err))
    }

    fn write(context: &'static str, err: rusqlite::Error) -> Self {
        Self::Write {
            context,
            source: DbError::Sqlite(err),
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(err) => write!(f, "problem reading notes from storage: {err}"),
            Self::Write { context, source } => write!(f, "{context}: {source}"),
            Self::Parse(err) => write!(f, "stored notes are not valid JSON: {err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate note id {id} in collection"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing; store not migrated")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read(err) => Some(err),
            Self::Write { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) | Self::NotFound(_) | Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<NoteValidationError> for StoreError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Store interface for the note collection.
///
/// Callers that only need use-case APIs should go through `NoteService`
/// instead of depending on this trait directly.
pub trait NoteStore {
    /// Loads the full collection.
    ///
    /// Returns `None` when the key has never been written (first run), as
    /// opposed to `Some(vec![])` for a present-but-empty collection.
    fn load_all(&self) -> StoreResult<Option<Vec<Note>>>;

    /// Returns the first note whose id equals `id`, in collection order.
    fn load_one(&self, id: NoteId) -> StoreResult<Option<Note>>;

    /// Serializes `notes` and overwrites the stored collection.
    ///
    /// `context` describes the mutation for write-fault reporting.
    fn save_all(&self, notes: &[Note], context: &'static str) -> StoreResult<()>;

    /// Writes the sample collection iff no collection exists yet.
    ///
    /// Idempotent; returns whether seeding happened on this call.
    fn ensure_seeded(&self) -> StoreResult<bool>;

    /// Appends a new note with the next free id and returns it.
    fn insert(&self, title: &str, description: &str) -> StoreResult<Note>;

    /// Replaces title and description of the note with the given id.
    fn update(&self, id: NoteId, title: &str, description: &str) -> StoreResult<Note>;

    /// Removes exactly one note by id and returns the removed record.
    fn delete(&self, id: NoteId) -> StoreResult<Note>;
}

/// Note store backed by the single-key KV substrate.
#[derive(Debug)]
pub struct KvNoteStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> KvNoteStore<'conn> {
    /// Constructs a store from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        if !kv_table_exists(conn)? {
            return Err(StoreError::MissingRequiredTable("kv_store"));
        }
        Ok(Self { conn })
    }
}

impl NoteStore for KvNoteStore<'_> {
    fn load_all(&self) -> StoreResult<Option<Vec<Note>>> {
        let raw = kv_get(self.conn, NOTES_KEY).map_err(StoreError::read)?;
        let Some(raw) = raw else {
            return Ok(None);
        };

        let notes: Vec<Note> = serde_json::from_str(&raw).map_err(StoreError::Parse)?;
        check_collection(&notes)?;
        Ok(Some(notes))
    }

    fn load_one(&self, id: NoteId) -> StoreResult<Option<Note>> {
        let Some(notes) = self.load_all()? else {
            return Ok(None);
        };
        Ok(notes.into_iter().find(|note| note.id == id))
    }

    fn save_all(&self, notes: &[Note], context: &'static str) -> StoreResult<()> {
        check_collection(notes)?;
        let raw = serde_json::to_string(notes).map_err(StoreError::Parse)?;
        kv_put(self.conn, NOTES_KEY, &raw).map_err(|err| StoreError::write(context, err))?;
        Ok(())
    }

    fn ensure_seeded(&self) -> StoreResult<bool> {
        if self.load_all()?.is_some() {
            return Ok(false);
        }
        self.save_all(&seed_notes(), "problem saving sample notes")?;
        Ok(true)
    }

    fn insert(&self, title: &str, description: &str) -> StoreResult<Note> {
        // An uninitialized store behaves as the empty collection; the first
        // insert also initializes the key.
        let mut notes = self.load_all()?.unwrap_or_default();
        let note = Note::new(next_note_id(&notes), title, description);
        notes.push(note.clone());
        self.save_all(&notes, "problem saving new note")?;
        Ok(note)
    }

    fn update(&self, id: NoteId, title: &str, description: &str) -> StoreResult<Note> {
        let mut notes = self.load_all()?.ok_or(StoreError::NotFound(id))?;
        let note = notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(StoreError::NotFound(id))?;
        note.title = title.to_owned();
        note.description = description.to_owned();
        let updated = note.clone();
        self.save_all(&notes, "problem saving edited note")?;
        Ok(updated)
    }

    fn delete(&self, id: NoteId) -> StoreResult<Note> {
        let mut notes = self.load_all()?.ok_or(StoreError::NotFound(id))?;
        let position = notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = notes.remove(position);
        self.save_all(&notes, "problem deleting note")?;
        Ok(removed)
    }
}

/// Returns the id the next inserted note receives.
///
/// Max existing id plus one, or 1 for an empty collection. Deleting the tail
/// note can therefore never hand a live note's id to a new one.
pub fn next_note_id(notes: &[Note]) -> NoteId {
    notes
        .iter()
        .map(|note| note.id)
        .max()
        .map_or(1, |max_id| max_id + 1)
}

fn check_collection(notes: &[Note]) -> StoreResult<()> {
    let mut seen = HashSet::with_capacity(notes.len());
    for note in notes {
        note.validate()?;
        if !seen.insert(note.id) {
            return Err(StoreError::DuplicateId(note.id));
        }
    }
    Ok(())
}

fn kv_table_exists(conn: &Connection) -> StoreResult<bool> {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = 'kv_store'
            );",
            [],
            |row| row.get(0),
        )
        .map_err(StoreError::read)?;
    Ok(exists == 1)
}

#[cfg(test)]
mod tests {
    use super::next_note_id;
    use crate::model::note::Note;

    #[test]
    fn next_id_is_one_for_empty_collection() {
        assert_eq!(next_note_id(&[]), 1);
    }

    #[test]
    fn next_id_skips_holes_left_by_deletions() {
        // [1, 3] after deleting 2: the next id must not collide with 3.
        let notes = vec![Note::new(1, "a", ""), Note::new(3, "c", "")];
        assert_eq!(next_note_id(&notes), 4);
    }

    #[test]
    fn next_id_ignores_collection_order() {
        let notes = vec![Note::new(7, "x", ""), Note::new(2, "y", "")];
        assert_eq!(next_note_id(&notes), 8);
    }
}
