// Integration tests for task persistence

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use doitnow_core::{Category, ExErrorKind, Task, TaskPatch};
use doitnow_store::db::open_in_memory_and_migrate;
use doitnow_store::SqliteRepo;
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    open_in_memory_and_migrate().unwrap()
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap()
}

fn task(id: &str, title: &str, order_index: i64, created_at: DateTime<Utc>) -> Task {
    Task::new(id.to_string(), title.to_string(), order_index, created_at)
}

#[test]
fn test_insert_and_get_round_trip() {
    let conn = setup_test_db();
    let mut original = task("t1", "Buy milk", 0, t0());
    original.due_date = NaiveDate::from_ymd_opt(2026, 10, 20);
    original.reminder_time = Some(t0() + Duration::hours(3));

    SqliteRepo::insert_task(&conn, &original).unwrap();

    let loaded = SqliteRepo::get_task(&conn, "t1").unwrap().unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_get_unknown_task_is_none() {
    let conn = setup_test_db();
    assert!(SqliteRepo::get_task(&conn, "missing").unwrap().is_none());
}

#[test]
fn test_list_orders_by_index_then_newest_first() {
    // Given: Two tasks sharing an order_index and one ahead of them
    let conn = setup_test_db();
    SqliteRepo::insert_task(&conn, &task("older", "Older", 1, t0())).unwrap();
    SqliteRepo::insert_task(&conn, &task("newer", "Newer", 1, t0() + Duration::minutes(1)))
        .unwrap();
    SqliteRepo::insert_task(&conn, &task("first", "First", 0, t0() + Duration::minutes(2)))
        .unwrap();

    // When: Listing
    let ids: Vec<String> = SqliteRepo::list_tasks(&conn)
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();

    // Then: order_index ascending, ties broken by created_at descending
    assert_eq!(ids, vec!["first", "newer", "older"]);
    assert_eq!(SqliteRepo::count_tasks(&conn).unwrap(), 3);
}

#[test]
fn test_set_completion_and_reopen() {
    let conn = setup_test_db();
    SqliteRepo::insert_task(&conn, &task("t1", "Run", 0, t0())).unwrap();

    let done_at = t0() + Duration::hours(1);
    assert!(SqliteRepo::set_task_completion(&conn, "t1", Some(done_at), done_at).unwrap());
    let loaded = SqliteRepo::get_task(&conn, "t1").unwrap().unwrap();
    assert!(loaded.is_completed);
    assert_eq!(loaded.completed_at, Some(done_at));

    let reopened_at = done_at + Duration::minutes(5);
    assert!(SqliteRepo::set_task_completion(&conn, "t1", None, reopened_at).unwrap());
    let loaded = SqliteRepo::get_task(&conn, "t1").unwrap().unwrap();
    assert!(!loaded.is_completed);
    assert!(loaded.completed_at.is_none());
    assert_eq!(loaded.updated_at, reopened_at);
}

#[test]
fn test_writes_to_unknown_task_report_false() {
    let conn = setup_test_db();
    assert!(!SqliteRepo::set_task_completion(&conn, "nope", Some(t0()), t0()).unwrap());
    assert!(
        !SqliteRepo::update_task(&conn, "nope", &TaskPatch::default().title("x"), t0()).unwrap()
    );
    assert!(!SqliteRepo::delete_task(&conn, "nope").unwrap());
}

#[test]
fn test_update_clears_nullable_fields() {
    let conn = setup_test_db();
    let mut original = task("t1", "Read", 0, t0());
    original.due_date = NaiveDate::from_ymd_opt(2026, 10, 20);
    SqliteRepo::insert_task(&conn, &original).unwrap();

    let patch = TaskPatch::default().title("Read a book").due_date(None);
    SqliteRepo::update_task(&conn, "t1", &patch, t0() + Duration::hours(1)).unwrap();

    let loaded = SqliteRepo::get_task(&conn, "t1").unwrap().unwrap();
    assert_eq!(loaded.title, "Read a book");
    assert!(loaded.due_date.is_none());
    assert_eq!(loaded.created_at, t0());
}

#[test]
fn test_empty_patch_leaves_row_untouched() {
    let conn = setup_test_db();
    SqliteRepo::insert_task(&conn, &task("t1", "Read", 0, t0())).unwrap();

    let changed =
        SqliteRepo::update_task(&conn, "t1", &TaskPatch::default(), t0() + Duration::hours(1))
            .unwrap();

    assert!(!changed);
    let loaded = SqliteRepo::get_task(&conn, "t1").unwrap().unwrap();
    assert_eq!(loaded.updated_at, t0());
}

#[test]
fn test_unknown_category_reference_is_a_constraint_violation() {
    let conn = setup_test_db();
    let mut orphan = task("t1", "Orphan", 0, t0());
    orphan.category_id = Some("no-such-category".to_string());

    let err = SqliteRepo::insert_task(&conn, &orphan).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
}

#[test]
fn test_task_with_category_round_trips() {
    let conn = setup_test_db();
    let category = Category::new(
        "c1".to_string(),
        "Work".to_string(),
        "briefcase-outline".to_string(),
        "#007AFF".to_string(),
        0,
        t0(),
    );
    SqliteRepo::insert_category(&conn, &category).unwrap();

    let mut filed = task("t1", "Report", 0, t0());
    filed.category_id = Some("c1".to_string());
    SqliteRepo::insert_task(&conn, &filed).unwrap();

    let loaded = SqliteRepo::get_task(&conn, "t1").unwrap().unwrap();
    assert_eq!(loaded.category_id.as_deref(), Some("c1"));
}

#[test]
fn test_rows_written_with_sqlite_defaults_are_readable() {
    // Rows inserted by other tools carry CURRENT_TIMESTAMP text
    let conn = setup_test_db();
    conn.execute(
        "INSERT INTO tasks (id, title) VALUES ('legacy', 'From elsewhere')",
        [],
    )
    .unwrap();

    let loaded = SqliteRepo::get_task(&conn, "legacy").unwrap().unwrap();
    assert_eq!(loaded.title, "From elsewhere");
    assert!(!loaded.is_completed);
}

#[test]
fn test_corrupt_timestamp_surfaces_as_serialization_error() {
    let conn = setup_test_db();
    conn.execute(
        "INSERT INTO tasks (id, title, created_at, updated_at) VALUES ('bad', 'Bad', 'yesterday', 'yesterday')",
        [],
    )
    .unwrap();

    let err = SqliteRepo::get_task(&conn, "bad").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Serialization);
}
