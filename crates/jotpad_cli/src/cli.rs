//! Command-line surface for jotpad.
//!
//! # Responsibility
//! - Declare the argument/subcommand structure.
//! - Map verbosity flags to a core log level.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use jotpad_core::{default_log_level, NoteId};

/// jotpad - keep short notes on your own machine
///
/// Notes live in a local store under your platform data directory; nothing
/// ever leaves the device.
#[derive(Debug, Parser)]
#[command(name = "jotpad")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the note store and logs
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all notes (loads the sample notes on first run)
    List,

    /// Show one note in full
    View {
        /// Id of the note to show
        id: NoteId,
    },

    /// Add a new note
    Add {
        /// Note title
        title: String,
        /// Note body; empty when omitted
        description: Option<String>,
    },

    /// Edit an existing note
    Edit {
        /// Id of the note to edit
        id: NoteId,
        /// New title; keeps the current one when omitted
        #[arg(long)]
        title: Option<String>,
        /// New body; keeps the current one when omitted
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a note
    Delete {
        /// Id of the note to delete
        id: NoteId,
    },
}

impl Cli {
    /// Log level derived from the verbosity flags.
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => default_log_level(),
                1 => "debug",
                _ => "trace",
            }
        }
    }
}
