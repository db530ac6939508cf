// Integration tests for per-day statistics

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use doitnow_store::db::open_in_memory_and_migrate;
use doitnow_store::SqliteRepo;
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    open_in_memory_and_migrate().unwrap()
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap()
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

#[test]
fn test_created_upsert_accumulates_on_one_row() {
    let conn = setup_test_db();
    SqliteRepo::record_task_created(&conn, day(18), t0()).unwrap();
    SqliteRepo::record_task_created(&conn, day(18), t0()).unwrap();

    let stat = SqliteRepo::get_stat(&conn, day(18)).unwrap().unwrap();
    assert_eq!(stat.tasks_created, 2);
    assert_eq!(stat.tasks_completed, 0);
    assert_eq!(SqliteRepo::list_all_stats(&conn).unwrap().len(), 1);
}

#[test]
fn test_completed_upsert_creates_row_when_missing() {
    let conn = setup_test_db();
    SqliteRepo::record_task_completed(&conn, day(17), t0()).unwrap();

    let stat = SqliteRepo::get_stat(&conn, day(17)).unwrap().unwrap();
    assert_eq!(stat.tasks_completed, 1);
    assert_eq!(stat.tasks_created, 0);
}

#[test]
fn test_retract_never_goes_negative() {
    let conn = setup_test_db();
    SqliteRepo::record_task_created(&conn, day(18), t0()).unwrap();

    assert!(SqliteRepo::retract_task_completed(&conn, day(18), t0()).unwrap());
    let stat = SqliteRepo::get_stat(&conn, day(18)).unwrap().unwrap();
    assert_eq!(stat.tasks_completed, 0);
}

#[test]
fn test_retract_on_missing_day_reports_false() {
    let conn = setup_test_db();
    assert!(!SqliteRepo::retract_task_completed(&conn, day(1), t0()).unwrap());
    assert!(SqliteRepo::get_stat(&conn, day(1)).unwrap().is_none());
}

#[test]
fn test_list_since_is_inclusive_and_newest_first() {
    let conn = setup_test_db();
    for d in [10, 15, 16, 18] {
        SqliteRepo::record_task_completed(&conn, day(d), t0()).unwrap();
    }

    let dates: Vec<NaiveDate> = SqliteRepo::list_stats_since(&conn, day(15))
        .unwrap()
        .into_iter()
        .map(|s| s.date)
        .collect();
    assert_eq!(dates, vec![day(18), day(16), day(15)]);
}
