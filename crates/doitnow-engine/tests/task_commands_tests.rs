// Integration tests for task command handlers

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use doitnow_core::{ExErrorKind, TaskPatch};
use doitnow_engine::commands::{category, task};
use doitnow_store::db::open_in_memory_and_migrate;
use doitnow_store::SqliteRepo;
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    open_in_memory_and_migrate().unwrap()
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap()
}

fn today() -> NaiveDate {
    t0().date_naive()
}

#[test]
fn test_add_assigns_order_and_counts_creation() {
    // Given: An empty database
    let mut conn = setup_test_db();

    // When: Two tasks are added
    let first = task::task_add("  Buy milk ", None, &mut conn, t0()).unwrap();
    let second = task::task_add("Walk dog", None, &mut conn, t0()).unwrap();

    // Then: Titles are trimmed and order follows insertion
    assert_eq!(first.title, "Buy milk");
    assert_eq!(first.order_index, 0);
    assert_eq!(second.order_index, 1);

    // And: Today's stat row counts both creations
    let stat = SqliteRepo::get_stat(&conn, today()).unwrap().unwrap();
    assert_eq!(stat.tasks_created, 2);
    assert_eq!(stat.tasks_completed, 0);
}

#[test]
fn test_add_rejects_blank_title_without_side_effects() {
    let mut conn = setup_test_db();

    let err = task::task_add("   ", None, &mut conn, t0()).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidTitle);
    assert_eq!(SqliteRepo::count_tasks(&conn).unwrap(), 0);
    assert!(SqliteRepo::get_stat(&conn, today()).unwrap().is_none());
}

#[test]
fn test_add_with_unknown_category_is_not_found() {
    let mut conn = setup_test_db();

    let err = task::task_add("Report", Some("ghost".to_string()), &mut conn, t0()).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity_id(), Some("ghost"));
    assert!(SqliteRepo::get_stat(&conn, today()).unwrap().is_none());
}

#[test]
fn test_toggle_completes_then_reopens() {
    let mut conn = setup_test_db();
    let added = task::task_add("Run", None, &mut conn, t0()).unwrap();

    // Complete
    let done_at = t0() + Duration::hours(2);
    let done = task::task_toggle(&added.id, &mut conn, done_at).unwrap();
    assert!(done.is_completed);
    assert_eq!(done.completed_at, Some(done_at));
    assert_eq!(
        SqliteRepo::get_stat(&conn, today()).unwrap().unwrap().tasks_completed,
        1
    );

    // Reopen
    let reopened = task::task_toggle(&added.id, &mut conn, done_at + Duration::minutes(1)).unwrap();
    assert!(!reopened.is_completed);
    assert!(reopened.completed_at.is_none());
    assert_eq!(
        SqliteRepo::get_stat(&conn, today()).unwrap().unwrap().tasks_completed,
        0
    );

    // The stored row matches what was returned
    let stored = SqliteRepo::get_task(&conn, &added.id).unwrap().unwrap();
    assert_eq!(stored, reopened);
}

#[test]
fn test_reopen_next_day_retracts_from_todays_row() {
    // Given: A task completed yesterday, and another completed today
    let mut conn = setup_test_db();
    let old = task::task_add("Read", None, &mut conn, t0()).unwrap();
    task::task_toggle(&old.id, &mut conn, t0()).unwrap();

    let tomorrow = t0() + Duration::days(1);
    let fresh = task::task_add("Write", None, &mut conn, tomorrow).unwrap();
    task::task_toggle(&fresh.id, &mut conn, tomorrow).unwrap();

    // When: Yesterday's task is reopened
    task::task_toggle(&old.id, &mut conn, tomorrow).unwrap();

    // Then: Today's counter drops and yesterday's is left alone
    assert_eq!(
        SqliteRepo::get_stat(&conn, tomorrow.date_naive())
            .unwrap()
            .unwrap()
            .tasks_completed,
        0
    );
    assert_eq!(
        SqliteRepo::get_stat(&conn, today()).unwrap().unwrap().tasks_completed,
        1
    );
}

#[test]
fn test_reopen_next_day_without_todays_row_creates_nothing() {
    let mut conn = setup_test_db();
    let added = task::task_add("Read", None, &mut conn, t0()).unwrap();
    task::task_toggle(&added.id, &mut conn, t0()).unwrap();

    let tomorrow = t0() + Duration::days(1);
    task::task_toggle(&added.id, &mut conn, tomorrow).unwrap();

    assert!(SqliteRepo::get_stat(&conn, tomorrow.date_naive())
        .unwrap()
        .is_none());
    assert_eq!(
        SqliteRepo::get_stat(&conn, today()).unwrap().unwrap().tasks_completed,
        1
    );
}

#[test]
fn test_reopen_without_stat_row_stays_at_zero() {
    // A task completed by some other writer that never touched user_stats
    let mut conn = setup_test_db();
    conn.execute(
        "INSERT INTO tasks (id, title, is_completed, completed_at, created_at, updated_at)
         VALUES ('ext', 'External', 1, '2026-10-18T08:00:00.000Z', '2026-10-18T07:00:00.000Z', '2026-10-18T08:00:00.000Z')",
        [],
    )
    .unwrap();

    let reopened = task::task_toggle("ext", &mut conn, t0()).unwrap();

    assert!(!reopened.is_completed);
    assert!(SqliteRepo::get_stat(&conn, today()).unwrap().is_none());
}

#[test]
fn test_toggle_unknown_task_is_not_found() {
    let mut conn = setup_test_db();
    let err = task::task_toggle("nope", &mut conn, t0()).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.op(), Some("task_toggle"));
}

#[test]
fn test_update_applies_patch_and_bumps_updated_at() {
    let mut conn = setup_test_db();
    let work = category::category_add("Work", None, None, &conn, t0()).unwrap();
    let added = task::task_add("Draft", None, &mut conn, t0()).unwrap();

    let later = t0() + Duration::hours(1);
    let due = NaiveDate::from_ymd_opt(2026, 10, 25).unwrap();
    let patch = TaskPatch::default()
        .title(" Draft report ")
        .due_date(Some(due))
        .category_id(Some(work.id.clone()));
    let updated = task::task_update(&added.id, patch, &conn, later).unwrap();

    assert_eq!(updated.title, "Draft report");
    assert_eq!(updated.due_date, Some(due));
    assert_eq!(updated.category_id.as_deref(), Some(work.id.as_str()));
    assert_eq!(updated.updated_at, later);
    assert_eq!(SqliteRepo::get_task(&conn, &added.id).unwrap().unwrap(), updated);
}

#[test]
fn test_empty_update_is_a_no_op() {
    let mut conn = setup_test_db();
    let added = task::task_add("Draft", None, &mut conn, t0()).unwrap();

    let unchanged =
        task::task_update(&added.id, TaskPatch::default(), &conn, t0() + Duration::hours(1))
            .unwrap();

    assert_eq!(unchanged, added);
}

#[test]
fn test_update_validation_failures() {
    let mut conn = setup_test_db();
    let added = task::task_add("Draft", None, &mut conn, t0()).unwrap();

    let blank = task::task_update(&added.id, TaskPatch::default().title(""), &conn, t0());
    assert_eq!(blank.unwrap_err().kind(), ExErrorKind::InvalidTitle);

    let ghost_category = TaskPatch::default().category_id(Some("ghost".to_string()));
    let err = task::task_update(&added.id, ghost_category, &conn, t0()).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity_id(), Some("ghost"));

    let missing = task::task_update("nope", TaskPatch::default().title("x"), &conn, t0());
    assert_eq!(missing.unwrap_err().kind(), ExErrorKind::NotFound);
}

#[test]
fn test_delete_keeps_statistics() {
    let mut conn = setup_test_db();
    let added = task::task_add("Temp", None, &mut conn, t0()).unwrap();
    task::task_toggle(&added.id, &mut conn, t0()).unwrap();

    task::task_delete(&added.id, &conn).unwrap();

    assert!(task::task_list(&conn).unwrap().is_empty());
    let stat = SqliteRepo::get_stat(&conn, today()).unwrap().unwrap();
    assert_eq!(stat.tasks_created, 1);
    assert_eq!(stat.tasks_completed, 1);

    let again = task::task_delete(&added.id, &conn).unwrap_err();
    assert_eq!(again.kind(), ExErrorKind::NotFound);
}
