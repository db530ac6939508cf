//! View-level state container
//!
//! `AppState` owns the database connection, a clock and the in-memory
//! `Store` mirror a presentation layer renders from. Every mutation runs the
//! matching engine command first and only touches the mirror once the
//! database write has succeeded, so the mirror never shows a state the
//! database does not have.
//!
//! Each call runs inside a `request` span carrying a fresh request id and the
//! session's trace id; errors returned to the caller are stamped with both.

use std::path::Path;

use chrono::NaiveDate;
use doitnow_core::model::SettingKey;
use doitnow_core::{
    Category, CategoryPatch, Clock, Settings, Store, Task, TaskPatch, UserStat,
};
use doitnow_core_types::{RequestContext, TraceId};
use doitnow_store::db;
use doitnow_store::errors::Result;
use rusqlite::Connection;

use crate::commands::stats::DEFAULT_STATS_DAYS;
use crate::commands::{category, settings, stats, task};

pub struct AppState {
    conn: Connection,
    clock: Box<dyn Clock>,
    store: Store,
    /// Window of the last `fetch_user_stats`, reused when stats are re-fetched
    stats_days: u32,
    trace_id: TraceId,
}

impl AppState {
    /// Open (creating if needed) and migrate the database at `path`, then
    /// fetch everything into the mirror
    pub fn init<P: AsRef<Path>>(path: P, clock: Box<dyn Clock>) -> Result<Self> {
        let conn = db::open_and_migrate(path)?;
        Self::with_connection(conn, clock)
    }

    /// `init` against a private in-memory database
    pub fn init_in_memory(clock: Box<dyn Clock>) -> Result<Self> {
        let conn = db::open_in_memory_and_migrate()?;
        Self::with_connection(conn, clock)
    }

    /// Wrap an already migrated connection and fetch everything
    pub fn with_connection(conn: Connection, clock: Box<dyn Clock>) -> Result<Self> {
        let mut state = Self {
            conn,
            clock,
            store: Store::new(),
            stats_days: DEFAULT_STATS_DAYS,
            trace_id: TraceId::new(),
        };
        state.fetch_all()?;
        Ok(state)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn categories(&self) -> &[Category] {
        self.store.categories()
    }

    pub fn settings(&self) -> &Settings {
        self.store.settings()
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    /// Current UTC day according to the state's clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn trace_id(&self) -> &TraceId {
        &self.trace_id
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    // ===== Fetching =====

    pub fn fetch_all(&mut self) -> Result<()> {
        self.fetch_tasks()?;
        self.fetch_categories()?;
        self.fetch_user_stats(self.stats_days)?;
        self.fetch_settings()
    }

    /// Reload tasks; `is_loading` is set for the duration of the read
    pub fn fetch_tasks(&mut self) -> Result<()> {
        self.in_request(|state| {
            state.store.set_loading(true);
            let result = task::task_list(&state.conn);
            state.store.set_loading(false);
            state.store.replace_tasks(result?);
            Ok(())
        })
    }

    pub fn fetch_categories(&mut self) -> Result<()> {
        self.in_request(|state| {
            let categories = category::category_list(&state.conn)?;
            state.store.replace_categories(categories);
            Ok(())
        })
    }

    /// Reload the stat window covering the last `days` days
    pub fn fetch_user_stats(&mut self, days: u32) -> Result<()> {
        self.in_request(|state| {
            let rows = stats::stats_list(days, &state.conn, state.clock.today())?;
            state.stats_days = days;
            state.store.replace_user_stats(rows);
            Ok(())
        })
    }

    /// Every stat row on record, outside the mirrored window too
    pub fn user_stats_history(&mut self) -> Result<Vec<UserStat>> {
        self.in_request(|state| stats::stats_history(&state.conn))
    }

    pub fn fetch_settings(&mut self) -> Result<()> {
        self.in_request(|state| {
            let loaded = settings::settings_load(&state.conn)?;
            state.store.replace_settings(loaded);
            Ok(())
        })
    }

    // ===== Tasks =====

    pub fn add_task(&mut self, title: &str, category_id: Option<String>) -> Result<Task> {
        let task = self.in_request(|state| {
            let now = state.clock.now();
            let task = task::task_add(title, category_id, &mut state.conn, now)?;
            state.store.insert_task(task.clone());
            Ok(task)
        })?;
        self.refresh_user_stats();
        Ok(task)
    }

    pub fn toggle_task(&mut self, task_id: &str) -> Result<Task> {
        let task = self.in_request(|state| {
            let now = state.clock.now();
            let task = task::task_toggle(task_id, &mut state.conn, now)?;
            state.store.insert_task(task.clone());
            Ok(task)
        })?;
        self.refresh_user_stats();
        Ok(task)
    }

    pub fn update_task(&mut self, task_id: &str, patch: TaskPatch) -> Result<Task> {
        self.in_request(|state| {
            let now = state.clock.now();
            let task = task::task_update(task_id, patch, &state.conn, now)?;
            state.store.insert_task(task.clone());
            Ok(task)
        })
    }

    pub fn delete_task(&mut self, task_id: &str) -> Result<()> {
        self.in_request(|state| {
            task::task_delete(task_id, &state.conn)?;
            // The row may never have been fetched
            state.store.remove_task(task_id).ok();
            Ok(())
        })
    }

    // ===== Categories =====

    pub fn add_category(
        &mut self,
        name: &str,
        icon: Option<&str>,
        color: Option<&str>,
    ) -> Result<Category> {
        self.in_request(|state| {
            let now = state.clock.now();
            let created = category::category_add(name, icon, color, &state.conn, now)?;
            state.store.insert_category(created.clone());
            Ok(created)
        })
    }

    pub fn update_category(&mut self, category_id: &str, patch: CategoryPatch) -> Result<Category> {
        self.in_request(|state| {
            let updated = category::category_update(category_id, patch, &state.conn)?;
            state.store.insert_category(updated.clone());
            Ok(updated)
        })
    }

    /// Delete a category; mirrored tasks filed under it lose their category
    pub fn delete_category(&mut self, category_id: &str) -> Result<()> {
        self.in_request(|state| {
            category::category_delete(category_id, &state.conn)?;
            state.store.remove_category(category_id).ok();
            Ok(())
        })
    }

    // ===== Settings =====

    pub fn set_setting(&mut self, key: SettingKey, value: bool) -> Result<Settings> {
        self.in_request(|state| {
            let now = state.clock.now();
            let saved = settings::settings_set(key, value, &state.conn, now)?;
            state.store.replace_settings(saved);
            Ok(saved)
        })
    }

    /// Re-fetch the stat window after a committed write
    ///
    /// The write already succeeded, so a failed read is logged and the mirror
    /// keeps its previous stat rows until the next fetch.
    fn refresh_user_stats(&mut self) {
        if let Err(e) = self.fetch_user_stats(self.stats_days) {
            tracing::warn!(
                err.code = e.code(),
                error = %e,
                "stat refresh failed after commit"
            );
        }
    }

    fn in_request<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let ctx = RequestContext::new().with_trace_id(self.trace_id.clone());
        let span = tracing::info_span!(
            "request",
            request_id = %ctx.request_id,
            trace_id = %self.trace_id
        );
        let _guard = span.enter();

        f(self).map_err(|e| {
            e.with_request_id(ctx.request_id.clone())
                .with_trace_id(self.trace_id.clone())
        })
    }
}
