//! Category command handlers with boundary logging.

use chrono::{DateTime, Utc};
use doitnow_core::ops::category_ops;
use doitnow_core::rules::validate_category_patch;
use doitnow_core::{log_op_end, log_op_error, log_op_start, Category, CategoryPatch};
use doitnow_store::errors::{not_found, Result};
use doitnow_store::SqliteRepo;
use rusqlite::Connection;

/// Create a category at the end of the picker order
///
/// Missing icon and color fall back to `folder-outline` and `#FF6B00`.
///
/// ## Errors
///
/// - `InvalidName` / `InvalidIcon` / `InvalidColor`: Validation failed
/// - `Persistence`: Database error
pub fn category_add(
    name: &str,
    icon: Option<&str>,
    color: Option<&str>,
    conn: &Connection,
    now: DateTime<Utc>,
) -> Result<Category> {
    log_op_start!("category_add");
    let start = std::time::Instant::now();

    let category = category_add_impl(name, icon, color, conn, now).map_err(|e| {
        log_op_error!(
            "category_add",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "category_add",
        duration_ms = start.elapsed().as_millis() as u64,
        category_id = category.id.as_str()
    );

    Ok(category)
}

fn category_add_impl(
    name: &str,
    icon: Option<&str>,
    color: Option<&str>,
    conn: &Connection,
    now: DateTime<Utc>,
) -> Result<Category> {
    let order_index = SqliteRepo::count_categories(conn)?;
    let category = category_ops::create_category(name, icon, color, order_index, now)?;
    SqliteRepo::insert_category(conn, &category)?;
    Ok(category)
}

/// Apply a partial update to a category
///
/// ## Errors
///
/// - Validation errors for the patched fields
/// - `NotFound`: No category with this id
/// - `Persistence`: Database error
pub fn category_update(
    category_id: &str,
    patch: CategoryPatch,
    conn: &Connection,
) -> Result<Category> {
    log_op_start!("category_update", category_id = category_id);
    let start = std::time::Instant::now();

    let category = category_update_impl(category_id, patch, conn).map_err(|e| {
        log_op_error!(
            "category_update",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            category_id = category_id
        );
        e
    })?;

    log_op_end!(
        "category_update",
        duration_ms = start.elapsed().as_millis() as u64,
        category_id = category_id
    );

    Ok(category)
}

fn category_update_impl(
    category_id: &str,
    patch: CategoryPatch,
    conn: &Connection,
) -> Result<Category> {
    let patch = validate_category_patch(patch)?;

    let mut category = SqliteRepo::get_category(conn, category_id)?
        .ok_or_else(|| not_found("category_update", "Category", category_id))?;

    SqliteRepo::update_category(conn, category_id, &patch)?;
    category.apply_patch(&patch);
    Ok(category)
}

/// Delete a category; its tasks stay and lose their category
///
/// ## Errors
///
/// - `NotFound`: No category with this id
/// - `Persistence`: Database error
pub fn category_delete(category_id: &str, conn: &Connection) -> Result<()> {
    log_op_start!("category_delete", category_id = category_id);
    let start = std::time::Instant::now();

    let deleted = SqliteRepo::delete_category(conn, category_id).and_then(|deleted| {
        if deleted {
            Ok(())
        } else {
            Err(not_found("category_delete", "Category", category_id))
        }
    });

    match deleted {
        Ok(()) => {
            log_op_end!(
                "category_delete",
                duration_ms = start.elapsed().as_millis() as u64,
                category_id = category_id
            );
            Ok(())
        }
        Err(e) => {
            log_op_error!(
                "category_delete",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                category_id = category_id
            );
            Err(e)
        }
    }
}

/// All categories in picker order
pub fn category_list(conn: &Connection) -> Result<Vec<Category>> {
    log_op_start!("category_list");
    let start = std::time::Instant::now();

    let categories = SqliteRepo::list_categories(conn).map_err(|e| {
        log_op_error!(
            "category_list",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "category_list",
        duration_ms = start.elapsed().as_millis() as u64,
        row_count = categories.len()
    );

    Ok(categories)
}
