//! Core domain logic for jotpad.
//! This crate is the single source of truth for note collection invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{seed_notes, Note, NoteId, NoteValidationError};
pub use repo::note_repo::{
    next_note_id, KvNoteStore, NoteStore, StoreError, StoreResult, NOTES_KEY,
};
pub use service::note_service::{
    note_excerpt, render_note_rows, NoteListRow, NoteService, NoteServiceError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
