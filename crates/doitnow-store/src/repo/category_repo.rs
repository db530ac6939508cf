use doitnow_core::model::datetime::format_timestamp;
use doitnow_core::{Category, CategoryPatch};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, ToSql};

use super::rows::{category_from_row, CATEGORY_COLUMNS};
use super::sqlite_repo::SqliteRepo;
use crate::errors::{from_rusqlite, Result};

impl SqliteRepo {
    /// All categories in picker order
    pub fn list_categories(conn: &Connection) -> Result<Vec<Category>> {
        let sql = format!(
            "SELECT {} FROM categories ORDER BY order_index ASC, created_at ASC",
            CATEGORY_COLUMNS
        );
        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
        let categories = stmt
            .query_map([], category_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(categories)
    }

    pub fn get_category(conn: &Connection, category_id: &str) -> Result<Option<Category>> {
        let sql = format!("SELECT {} FROM categories WHERE id = ?", CATEGORY_COLUMNS);
        conn.query_row(&sql, [category_id], category_from_row)
            .optional()
            .map_err(from_rusqlite)
    }

    pub fn count_categories(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }

    pub fn insert_category(conn: &Connection, category: &Category) -> Result<()> {
        conn.execute(
            "INSERT INTO categories (id, name, icon, color, order_index, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                category.id,
                category.name,
                category.icon,
                category.color,
                category.order_index,
                format_timestamp(&category.created_at),
            ],
        )
        .map_err(from_rusqlite)?;

        tracing::debug!(category_id = %category.id, "inserted category");
        Ok(())
    }

    /// Apply a partial update; false when the patch is empty or the id is unknown
    pub fn update_category(
        conn: &Connection,
        category_id: &str,
        patch: &CategoryPatch,
    ) -> Result<bool> {
        if patch.is_empty() {
            return Ok(false);
        }

        let mut columns: Vec<&str> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(name) = &patch.name {
            columns.push("name");
            values.push(Box::new(name.clone()));
        }
        if let Some(icon) = &patch.icon {
            columns.push("icon");
            values.push(Box::new(icon.clone()));
        }
        if let Some(color) = &patch.color {
            columns.push("color");
            values.push(Box::new(color.clone()));
        }
        if let Some(order_index) = patch.order_index {
            columns.push("order_index");
            values.push(Box::new(order_index));
        }
        values.push(Box::new(category_id.to_string()));

        let assignments: Vec<String> = columns.iter().map(|c| format!("{} = ?", c)).collect();
        let sql = format!(
            "UPDATE categories SET {} WHERE id = ?",
            assignments.join(", ")
        );

        let changed = conn
            .execute(&sql, params_from_iter(values.iter()))
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    /// Delete a category; tasks that referenced it keep existing with a null
    /// `category_id`
    pub fn delete_category(conn: &Connection, category_id: &str) -> Result<bool> {
        let changed = conn
            .execute("DELETE FROM categories WHERE id = ?", [category_id])
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }
}
