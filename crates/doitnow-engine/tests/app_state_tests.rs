// Integration tests for the view-level state container

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use doitnow_core::model::SettingKey;
use doitnow_core::queries::longest_streak;
use doitnow_core::{CategoryPatch, ExErrorKind, FixedClock, TaskPatch};
use doitnow_engine::AppState;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap()
}

fn setup_state() -> (AppState, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(t0()));
    let state = AppState::init_in_memory(Box::new(Arc::clone(&clock))).unwrap();
    (state, clock)
}

#[test]
fn test_init_on_empty_database() {
    let (state, _clock) = setup_state();

    assert!(state.tasks().is_empty());
    assert!(state.categories().is_empty());
    assert!(state.store().user_stats().is_empty());
    assert!(state.settings().haptics_enabled);
    assert!(!state.is_loading());
    assert_eq!(state.today(), t0().date_naive());
}

#[test]
fn test_add_task_appends_and_refreshes_stats() {
    let (mut state, _clock) = setup_state();

    let first = state.add_task("Buy milk", None).unwrap();
    let second = state.add_task("Walk dog", None).unwrap();

    let ids: Vec<&str> = state.tasks().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec![first.id.as_str(), second.id.as_str()]);

    let stats = state.store().user_stats();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].tasks_created, 2);
}

#[test]
fn test_toggle_updates_mirror_and_stats() {
    let (mut state, clock) = setup_state();
    let task = state.add_task("Run", None).unwrap();

    clock.advance(Duration::minutes(30));
    state.toggle_task(&task.id).unwrap();

    let mirrored = state.store().get_task(&task.id).unwrap();
    assert!(mirrored.is_completed);
    assert_eq!(mirrored.completed_at, Some(t0() + Duration::minutes(30)));
    assert_eq!(state.store().user_stats()[0].tasks_completed, 1);

    state.toggle_task(&task.id).unwrap();
    assert!(!state.store().get_task(&task.id).unwrap().is_completed);
    assert_eq!(state.store().user_stats()[0].tasks_completed, 0);
}

#[test]
fn test_mirror_matches_database_after_mutations() {
    let (mut state, clock) = setup_state();
    let work = state.add_category("Work", None, None).unwrap();
    let a = state.add_task("A", Some(work.id.clone())).unwrap();
    let b = state.add_task("B", None).unwrap();
    clock.advance(Duration::minutes(5));
    state.toggle_task(&a.id).unwrap();
    state
        .update_task(&b.id, TaskPatch::default().title("B2").order_index(0))
        .unwrap();
    state
        .update_category(&work.id, CategoryPatch::default().color("#007AFF"))
        .unwrap();

    let mut mirrored_tasks = state.tasks().to_vec();
    let mirrored_categories = state.categories().to_vec();

    state.fetch_all().unwrap();

    // Order may differ after a reorder; compare by id
    mirrored_tasks.sort_by(|x, y| x.id.cmp(&y.id));
    let mut fetched_tasks = state.tasks().to_vec();
    fetched_tasks.sort_by(|x, y| x.id.cmp(&y.id));
    assert_eq!(mirrored_tasks, fetched_tasks);
    assert_eq!(mirrored_categories, state.categories());
}

#[test]
fn test_delete_category_clears_mirrored_tasks() {
    let (mut state, _clock) = setup_state();
    let work = state.add_category("Work", None, None).unwrap();
    let task = state.add_task("Report", Some(work.id.clone())).unwrap();

    state.delete_category(&work.id).unwrap();

    assert!(state.categories().is_empty());
    assert!(state
        .store()
        .get_task(&task.id)
        .unwrap()
        .category_id
        .is_none());
}

#[test]
fn test_delete_unmirrored_category_clears_mirrored_tasks() {
    // Given: A category written behind the mirror's back, with a task filed under it
    let (mut state, _clock) = setup_state();
    state
        .connection()
        .execute(
            "INSERT INTO categories (id, name, created_at) VALUES ('side', 'Side', '2026-10-18T08:00:00.000Z')",
            [],
        )
        .unwrap();
    let task = state.add_task("Errand", Some("side".to_string())).unwrap();
    assert!(state.categories().is_empty());

    // When: The category is deleted
    state.delete_category("side").unwrap();

    // Then: The mirrored task matches the database again
    assert!(state
        .store()
        .get_task(&task.id)
        .unwrap()
        .category_id
        .is_none());
}

#[test]
fn test_delete_task_removes_from_mirror() {
    let (mut state, _clock) = setup_state();
    let task = state.add_task("Temp", None).unwrap();

    state.delete_task(&task.id).unwrap();

    assert!(state.tasks().is_empty());
}

#[test]
fn test_errors_leave_mirror_untouched_and_carry_correlation() {
    let (mut state, _clock) = setup_state();
    state.add_task("Keep", None).unwrap();
    let before = state.tasks().to_vec();

    let err = state.toggle_task("missing").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.trace_id(), Some(state.trace_id()));
    assert!(err.request_id().is_some());
    assert_eq!(state.tasks(), before.as_slice());
}

#[test]
fn test_fetch_user_stats_window_is_remembered() {
    let (mut state, clock) = setup_state();
    state.add_task("Old", None).unwrap();

    clock.advance(Duration::days(10));
    state.fetch_user_stats(7).unwrap();
    assert!(state.store().user_stats().is_empty());

    // Re-fetch after a mutation uses the same 7-day window
    state.add_task("New", None).unwrap();
    assert_eq!(state.store().user_stats().len(), 1);
    assert_eq!(state.store().user_stats()[0].date, state.today());
}

#[test]
fn test_committed_writes_survive_failed_stat_refresh() {
    // Given: A stat row the reader cannot parse
    let (mut state, _clock) = setup_state();
    state
        .connection()
        .execute(
            "INSERT INTO user_stats (id, date) VALUES ('bad', 'not-a-date')",
            [],
        )
        .unwrap();

    // When: Tasks are added and toggled
    let task = state.add_task("Still saved", None).unwrap();
    let toggled = state.toggle_task(&task.id).unwrap();

    // Then: Both writes are reported and mirrored
    assert!(toggled.is_completed);
    assert!(state.store().get_task(&task.id).unwrap().is_completed);
    assert!(state.fetch_user_stats(30).is_err());
}

#[test]
fn test_stats_history_reaches_past_the_window() {
    // Given: Five completion days in a row, five weeks ago, and one today
    let (mut state, clock) = setup_state();
    for _ in 0..5 {
        let task = state.add_task("Daily", None).unwrap();
        state.toggle_task(&task.id).unwrap();
        clock.advance(Duration::days(1));
    }
    clock.advance(Duration::days(35));
    let task = state.add_task("Today", None).unwrap();
    state.toggle_task(&task.id).unwrap();

    // When: The mirror holds the default 30-day window
    state.fetch_user_stats(30).unwrap();
    let history = state.user_stats_history().unwrap();

    // Then: Only the history sees the old streak
    assert_eq!(longest_streak(state.store().user_stats()), 1);
    assert_eq!(history.len(), 6);
    assert_eq!(longest_streak(&history), 5);
}

#[test]
fn test_set_setting_updates_mirror() {
    let (mut state, _clock) = setup_state();

    state.set_setting(SettingKey::DarkModeAuto, false).unwrap();

    assert!(!state.settings().dark_mode_auto);
    state.fetch_settings().unwrap();
    assert!(!state.settings().dark_mode_auto);
}

#[test]
fn test_file_backed_state_persists_between_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doitnow.db");
    let clock = Arc::new(FixedClock::new(t0()));

    {
        let mut state = AppState::init(&path, Box::new(Arc::clone(&clock))).unwrap();
        state.add_task("Persisted", None).unwrap();
    }

    let state = AppState::init(&path, Box::new(Arc::clone(&clock))).unwrap();
    assert_eq!(state.tasks().len(), 1);
    assert_eq!(state.tasks()[0].title, "Persisted");
}
