//! Item Repository Implementation
//!
//! SQLite-backed implementation of Repository<Item>

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tokio::sync::Mutex;

use super::traits::{Page, Repository};
use crate::domain::{DomainError, DomainResult, Item, NewItem};

const ITEM_COLUMNS: &str = "id, name, description, is_active, created_at, updated_at";

/// SQLite implementation of Item repository
#[derive(Clone)]
pub struct ItemRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ItemRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Item> for ItemRepository {
    type Draft = NewItem;

    async fn create(&self, draft: &NewItem) -> DomainResult<Item> {
        draft.validate()?;
        let conn = self.conn.lock().await;

        conn.execute(
            "INSERT INTO items (name, description, is_active, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                draft.name,
                draft.description,
                draft.is_active,
                Utc::now().to_rfc3339()
            ],
        )?;
        let id = conn.last_insert_rowid();

        select_item(&conn, id)?
            .ok_or_else(|| DomainError::Internal(format!("Item {} vanished after insert", id)))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Item>> {
        let conn = self.conn.lock().await;
        select_item(&conn, id)
    }

    async fn list(&self, page: Page) -> DomainResult<Vec<Item>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM items ORDER BY id ASC LIMIT ?1 OFFSET ?2",
            ITEM_COLUMNS
        ))?;
        let rows = stmt.query_map(params![page.limit, page.skip], row_to_item)?;
        let items = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }
}

fn select_item(conn: &Connection, id: i64) -> DomainResult<Option<Item>> {
    let item = conn
        .query_row(
            &format!("SELECT {} FROM items WHERE id = ?1", ITEM_COLUMNS),
            params![id],
            row_to_item,
        )
        .optional()?;
    Ok(item)
}

fn parse_timestamp(idx: usize, value: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Convert a row to Item
fn row_to_item(row: &Row<'_>) -> rusqlite::Result<Item> {
    let created_at: String = row.get(4)?;
    let updated_at: Option<String> = row.get(5)?;

    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        is_active: row.get(3)?,
        created_at: parse_timestamp(4, &created_at)?,
        updated_at: updated_at.as_deref().map(|s| parse_timestamp(5, s)).transpose()?,
    })
}
