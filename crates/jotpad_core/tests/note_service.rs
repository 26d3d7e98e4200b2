use jotpad_core::db::open_store_in_memory;
use jotpad_core::{
    render_note_rows, KvNoteStore, NoteService, NoteServiceError,
};

#[test]
fn create_get_and_list_flow() {
    let conn = open_store_in_memory().unwrap();
    let service = NoteService::new(KvNoteStore::try_new(&conn).unwrap());

    let created = service.create_note("Groceries", "Milk, eggs").unwrap();
    assert_eq!(created.id, 1);

    let fetched = service.get_note(created.id).unwrap();
    assert_eq!(fetched, created);

    let listed = service.list_notes().unwrap();
    assert_eq!(listed, vec![created]);
}

#[test]
fn list_on_fresh_store_is_empty_without_seeding() {
    let conn = open_store_in_memory().unwrap();
    let service = NoteService::new(KvNoteStore::try_new(&conn).unwrap());
    assert!(service.list_notes().unwrap().is_empty());
}

#[test]
fn ensure_seeded_reports_first_run_once() {
    let conn = open_store_in_memory().unwrap();
    let service = NoteService::new(KvNoteStore::try_new(&conn).unwrap());

    assert!(service.ensure_seeded().unwrap());
    assert!(!service.ensure_seeded().unwrap());
    assert_eq!(service.list_notes().unwrap().len(), 3);
}

#[test]
fn missing_note_surfaces_as_note_not_found() {
    let conn = open_store_in_memory().unwrap();
    let service = NoteService::new(KvNoteStore::try_new(&conn).unwrap());
    service.ensure_seeded().unwrap();

    assert!(matches!(
        service.get_note(42).unwrap_err(),
        NoteServiceError::NoteNotFound(42)
    ));
    assert!(matches!(
        service.update_note(42, "t", "d").unwrap_err(),
        NoteServiceError::NoteNotFound(42)
    ));
    assert!(matches!(
        service.delete_note(42).unwrap_err(),
        NoteServiceError::NoteNotFound(42)
    ));
}

#[test]
fn update_and_delete_round_trip_through_service() {
    let conn = open_store_in_memory().unwrap();
    let service = NoteService::new(KvNoteStore::try_new(&conn).unwrap());
    service.ensure_seeded().unwrap();

    let inserted = service.create_note("Groceries", "Milk, eggs").unwrap();
    assert_eq!(inserted.id, 4);

    service.delete_note(2).unwrap();
    let ids: Vec<i64> = service
        .list_notes()
        .unwrap()
        .iter()
        .map(|note| note.id)
        .collect();
    assert_eq!(ids, vec![1, 3, 4]);

    let updated = service.update_note(4, "Groceries v2", "Milk, eggs").unwrap();
    assert_eq!(updated.title, "Groceries v2");

    let notes = service.list_notes().unwrap();
    assert_eq!(notes[2].title, "Groceries v2");
    assert_eq!(notes[0].id, 1);
    assert_eq!(notes[1].id, 3);
}

#[test]
fn rendered_rows_follow_the_listed_collection() {
    let conn = open_store_in_memory().unwrap();
    let service = NoteService::new(KvNoteStore::try_new(&conn).unwrap());
    service.ensure_seeded().unwrap();
    service
        .create_note("Groceries", "Milk,\n eggs,\tand   bread")
        .unwrap();

    let rows = render_note_rows(&service.list_notes().unwrap());
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3].note_id, 4);
    assert_eq!(rows[3].heading, "Groceries");
    assert_eq!(rows[3].excerpt, "Milk, eggs, and bread");
}
