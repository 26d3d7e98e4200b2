//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep the presentation layer decoupled from storage details.

pub mod note_service;
