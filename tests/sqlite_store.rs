use chrono::NaiveDate;
use tempfile::TempDir;

use wordbox::{
    card::CardDraft,
    store::{CardStore, StoreError, sqlite::SqliteCardStore},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

fn draft(front: &str, back: &str) -> CardDraft {
    CardDraft {
        front: front.to_string(),
        back: back.to_string(),
    }
}

#[test]
fn insert_yields_monotonic_ids() {
    let mut store = SqliteCardStore::open_in_memory().expect("open");
    let due = date(2024, 1, 1);
    let id1 = store.insert(draft("a", "1"), due).expect("insert");
    let id2 = store.insert(draft("b", "2"), due).expect("insert");
    let id3 = store.insert(draft("c", "3"), due).expect("insert");
    assert_eq!((id1, id2, id3), (1, 2, 3));
}

#[test]
fn create_twice_reports_already_initialized() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("words.db");

    let store = SqliteCardStore::create(&db_path).expect("create");
    drop(store);

    match SqliteCardStore::create(&db_path) {
        Err(StoreError::AlreadyInitialized) => {}
        Err(other) => panic!("unexpected error: {other:?}"),
        Ok(_) => panic!("second create unexpectedly succeeded"),
    }
}

#[test]
fn open_before_create_reports_not_initialized() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("missing.db");

    match SqliteCardStore::open(&db_path) {
        Err(StoreError::NotInitialized) => {}
        Err(other) => panic!("unexpected error: {other:?}"),
        Ok(_) => panic!("open unexpectedly succeeded"),
    }
}

#[test]
fn next_due_picks_lowest_id_and_skips_future_cards() {
    let mut store = SqliteCardStore::open_in_memory().expect("open");
    let today = date(2024, 1, 10);

    let id_a = store.insert(draft("a", "1"), today).expect("insert");
    let _id_b = store.insert(draft("b", "2"), date(2024, 1, 11)).expect("insert");
    let id_c = store.insert(draft("c", "3"), date(2024, 1, 9)).expect("insert");

    let first = store.next_due(today).expect("query").expect("due card");
    assert_eq!(first.id, id_a);

    // Stable while the pool is unmutated.
    let again = store.next_due(today).expect("query").expect("due card");
    assert_eq!(again, first);

    store
        .update_schedule(id_a, 1, date(2024, 1, 12))
        .expect("update");
    let second = store.next_due(today).expect("query").expect("due card");
    assert_eq!(second.id, id_c);

    store
        .update_schedule(id_c, 1, date(2024, 1, 12))
        .expect("update");
    assert!(store.next_due(today).expect("query").is_none());
}

#[test]
fn update_schedule_writes_box_and_due_together() {
    let mut store = SqliteCardStore::open_in_memory().expect("open");
    let today = date(2024, 1, 10);
    let id = store.insert(draft("Haus", "house"), today).expect("insert");

    store.update_schedule(id, 3, date(2024, 1, 18)).expect("update");

    let cards = store.scan_all().expect("scan");
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].box_level, 3);
    assert_eq!(cards[0].due, date(2024, 1, 18));
}

#[test]
fn update_schedule_unknown_id_is_missing_card() {
    let mut store = SqliteCardStore::open_in_memory().expect("open");
    match store.update_schedule(7, 1, date(2024, 1, 1)) {
        Err(StoreError::MissingCard(7)) => {}
        Err(other) => panic!("unexpected error: {other:?}"),
        Ok(()) => panic!("update of a missing card unexpectedly succeeded"),
    }
}

#[test]
fn cards_survive_reopen() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("words.db");

    let mut store = SqliteCardStore::create(&db_path).expect("create");
    store
        .insert_exact("Haus", "house", 2, date(2024, 1, 10))
        .expect("insert");
    store
        .insert_exact("Baum", "tree", 0, date(2024, 1, 11))
        .expect("insert");
    let before = store.scan_all().expect("scan");
    drop(store);

    let reopened = SqliteCardStore::open(&db_path).expect("reopen");
    assert_eq!(reopened.scan_all().expect("scan"), before);
}

#[test]
fn scan_all_returns_creation_order() {
    let mut store = SqliteCardStore::open_in_memory().expect("open");
    store
        .insert_exact("c", "3", 1, date(2024, 3, 1))
        .expect("insert");
    store
        .insert_exact("a", "1", 0, date(2024, 1, 1))
        .expect("insert");
    store
        .insert_exact("b", "2", 2, date(2024, 2, 1))
        .expect("insert");

    let cards = store.scan_all().expect("scan");
    let fronts: Vec<&str> = cards.iter().map(|card| card.front.as_str()).collect();
    assert_eq!(fronts, ["c", "a", "b"]);
}
