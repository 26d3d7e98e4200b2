//! `jotpad` - note-taking CLI entry point.
//!
//! The CLI is presentation only: it resolves the data directory, opens the
//! store, and renders what the core service returns. After every mutation it
//! re-renders the full list so the user always sees the resulting state.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use jotpad_core::db::open_store;
use jotpad_core::{
    init_logging, render_note_rows, KvNoteStore, Note, NoteService, NoteStore,
};

mod cli;

use cli::{Cli, Command};

const STORE_FILE_NAME: &str = "jotpad.sqlite3";

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    std::fs::create_dir_all(&data_dir)?;
    // Canonicalize so a relative --data-dir still yields the absolute log
    // directory the logging bootstrap requires.
    let data_dir = data_dir.canonicalize()?;

    let log_dir = data_dir.join("logs");
    init_logging(cli.log_level(), &log_dir.to_string_lossy())?;
    info!(
        "event=cli_run module=cli status=start command={}",
        command_name(&cli.command)
    );

    let conn = open_store(data_dir.join(STORE_FILE_NAME))?;
    let store = KvNoteStore::try_new(&conn)?;
    let service = NoteService::new(store);

    match &cli.command {
        Command::List => handle_list(&service)?,
        Command::View { id } => handle_view(&service, *id)?,
        Command::Add { title, description } => {
            handle_add(&service, title, description.as_deref().unwrap_or_default())?;
        }
        Command::Edit {
            id,
            title,
            description,
        } => handle_edit(&service, *id, title.as_deref(), description.as_deref())?,
        Command::Delete { id } => handle_delete(&service, *id)?,
    }

    info!(
        "event=cli_run module=cli status=ok command={}",
        command_name(&cli.command)
    );
    Ok(())
}

fn handle_list<S: NoteStore>(service: &NoteService<S>) -> Result<(), Box<dyn Error>> {
    if service.ensure_seeded()? {
        info!("event=first_run module=cli status=ok");
    }
    print_note_list(&service.list_notes()?);
    Ok(())
}

fn handle_view<S: NoteStore>(service: &NoteService<S>, id: i64) -> Result<(), Box<dyn Error>> {
    let note = service.get_note(id)?;
    println!("id:          {}", note.id);
    println!("title:       {}", note.title);
    println!("description: {}", note.description);
    Ok(())
}

fn handle_add<S: NoteStore>(
    service: &NoteService<S>,
    title: &str,
    description: &str,
) -> Result<(), Box<dyn Error>> {
    let note = service.create_note(title, description)?;
    println!("added note {}", note.id);
    print_note_list(&service.list_notes()?);
    Ok(())
}

fn handle_edit<S: NoteStore>(
    service: &NoteService<S>,
    id: i64,
    title: Option<&str>,
    description: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    // Unspecified fields keep their current value; read the note first so a
    // missing id fails before anything is written.
    let current = service.get_note(id)?;
    let title = title.unwrap_or(&current.title);
    let description = description.unwrap_or(&current.description);
    let note = service.update_note(id, title, description)?;
    println!("updated note {}", note.id);
    print_note_list(&service.list_notes()?);
    Ok(())
}

fn handle_delete<S: NoteStore>(service: &NoteService<S>, id: i64) -> Result<(), Box<dyn Error>> {
    let note = service.delete_note(id)?;
    println!("deleted note {}", note.id);
    print_note_list(&service.list_notes()?);
    Ok(())
}

fn print_note_list(notes: &[Note]) {
    if notes.is_empty() {
        println!("no notes yet; run `jotpad add <title>` to create one");
        return;
    }
    for row in render_note_rows(notes) {
        println!("{:>4}  {}", row.note_id, row.heading);
        if !row.excerpt.is_empty() {
            println!("      {}", row.excerpt);
        }
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    let base = dirs::data_dir()
        .ok_or("could not determine a platform data directory; pass --data-dir")?;
    Ok(base.join("jotpad"))
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::List => "list",
        Command::View { .. } => "view",
        Command::Add { .. } => "add",
        Command::Edit { .. } => "edit",
        Command::Delete { .. } => "delete",
    }
}
