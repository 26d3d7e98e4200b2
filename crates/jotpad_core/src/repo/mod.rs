//! Repository layer: the note store contract and its KV-backed implementation.
//!
//! # Responsibility
//! - Define the use-case oriented data access contract for notes.
//! - Isolate key-value storage details from service orchestration.
//!
//! # Invariants
//! - Writes must validate records before persistence.
//! - Reads return semantic errors (`NotFound`) in addition to storage
//!   transport errors; invalid persisted state is rejected, never masked.

pub mod note_repo;
