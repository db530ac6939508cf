use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use doitnow_core::{Category, Task, UserStat};

/// Fixed reference instant: Sunday 2026-10-18 09:00 UTC
#[allow(dead_code)]
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Create a test task directly, bypassing validation
#[allow(dead_code)]
pub fn make_task(id: &str, completed: bool, due: Option<NaiveDate>) -> Task {
    let mut task = Task::new(id.to_string(), format!("Task {}", id), 0, t0());
    task.due_date = due;
    if completed {
        task.toggle(t0());
    }
    task
}

#[allow(dead_code)]
pub fn make_category(id: &str, name: &str) -> Category {
    Category::new(
        id.to_string(),
        name.to_string(),
        "folder-outline".to_string(),
        "#FF6B00".to_string(),
        0,
        t0(),
    )
}

#[allow(dead_code)]
pub fn make_stat(date: NaiveDate, completed: u32, created: u32) -> UserStat {
    let mut stat = UserStat::new(format!("stat-{}", date), date, t0());
    stat.tasks_completed = completed;
    stat.tasks_created = created;
    stat
}
