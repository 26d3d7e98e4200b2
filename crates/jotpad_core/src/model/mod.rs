//! Domain model for the note collection.
//!
//! # Responsibility
//! - Define the canonical note record persisted by the store.
//! - Own the first-run sample collection.
//!
//! # Invariants
//! - Every note is identified by a positive `NoteId`, unique within the
//!   collection.
//! - The collection is an ordered sequence; insertion order is meaningful.

pub mod note;
