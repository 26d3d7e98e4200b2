//! Note use-case service and list rendering projection.
//!
//! # Responsibility
//! - Provide the create/get/list/update/delete API the presentation layer
//!   consumes.
//! - Derive view-model rows from a collection with a pure function.
//!
//! # Invariants
//! - The service holds no UI-facing state; rendering takes a collection and
//!   returns rows, nothing is buffered between calls.
//! - A missing note surfaces as `NoteNotFound`, never as a storage error.

use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::{NoteStore, StoreError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const EXCERPT_MAX_CHARS: usize = 80;

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::NoteNotFound(_) => None,
        }
    }
}

impl From<StoreError> for NoteServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::NoteNotFound(id),
            other => Self::Store(other),
        }
    }
}

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListRow {
    /// Id of the note this row represents.
    pub note_id: NoteId,
    /// Note title, verbatim.
    pub heading: String,
    /// Description with whitespace collapsed, capped for list display.
    pub excerpt: String,
}

/// Note service facade over a store implementation.
pub struct NoteService<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> NoteService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Seeds the sample collection on first run; no-op afterwards.
    pub fn ensure_seeded(&self) -> Result<bool, NoteServiceError> {
        Ok(self.store.ensure_seeded()?)
    }

    /// Returns the full collection in insertion order.
    ///
    /// An uninitialized store reads as the empty collection here; callers
    /// that care about first-run state use `ensure_seeded`.
    pub fn list_notes(&self) -> Result<Vec<Note>, NoteServiceError> {
        Ok(self.store.load_all()?.unwrap_or_default())
    }

    /// Gets one note by id.
    pub fn get_note(&self, id: NoteId) -> Result<Note, NoteServiceError> {
        self.store
            .load_one(id)?
            .ok_or(NoteServiceError::NoteNotFound(id))
    }

    /// Creates a note and returns it with its assigned id.
    pub fn create_note(
        &self,
        title: impl AsRef<str>,
        description: impl AsRef<str>,
    ) -> Result<Note, NoteServiceError> {
        Ok(self.store.insert(title.as_ref(), description.as_ref())?)
    }

    /// Replaces title and description of an existing note.
    pub fn update_note(
        &self,
        id: NoteId,
        title: impl AsRef<str>,
        description: impl AsRef<str>,
    ) -> Result<Note, NoteServiceError> {
        Ok(self.store.update(id, title.as_ref(), description.as_ref())?)
    }

    /// Deletes a note and returns the removed record.
    pub fn delete_note(&self, id: NoteId) -> Result<Note, NoteServiceError> {
        Ok(self.store.delete(id)?)
    }
}

/// Projects a collection into list rows.
///
/// Pure: output depends only on the input collection, row order matches
/// collection order.
pub fn render_note_rows(notes: &[Note]) -> Vec<NoteListRow> {
    notes
        .iter()
        .map(|note| NoteListRow {
            note_id: note.id,
            heading: note.title.clone(),
            excerpt: note_excerpt(&note.description),
        })
        .collect()
}

/// Derives the list excerpt for a description.
///
/// Rules: whitespace runs collapse to one space, leading/trailing whitespace
/// is trimmed, the first 80 chars are retained.
pub fn note_excerpt(description: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(description, " ");
    collapsed.trim().chars().take(EXCERPT_MAX_CHARS).collect()
}
