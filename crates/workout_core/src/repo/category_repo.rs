//! Category repository contract and SQLite implementation.

use super::{map_insert_error, now_epoch_ms, parse_record_id, StoreResult};
use crate::model::category::{CategoryIn, CategoryOut};
use crate::model::RecordId;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

const ENTITY: &str = "category";

/// Repository interface for category persistence.
pub trait CategoryRepository {
    fn create_category(&self, input: &CategoryIn) -> StoreResult<CategoryOut>;
    fn find_category_id(&self, name: &str) -> StoreResult<Option<RecordId>>;
    fn list_categories(&self) -> StoreResult<Vec<CategoryOut>>;
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn create_category(&self, input: &CategoryIn) -> StoreResult<CategoryOut> {
        input.validate()?;

        let record = CategoryOut {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            created_at: now_epoch_ms(),
        };
        self.conn
            .execute(
                "INSERT INTO categories (id, name, created_at) VALUES (?1, ?2, ?3);",
                params![record.id.to_string(), record.name.as_str(), record.created_at],
            )
            .map_err(|err| map_insert_error(err, ENTITY, &record.name))?;

        Ok(record)
    }

    fn find_category_id(&self, name: &str) -> StoreResult<Option<RecordId>> {
        let id_text = self
            .conn
            .query_row(
                "SELECT id FROM categories WHERE name = ?1;",
                [name],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        id_text
            .map(|value| parse_record_id(&value, "categories.id"))
            .transpose()
    }

    fn list_categories(&self) -> StoreResult<Vec<CategoryOut>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, created_at
             FROM categories
             ORDER BY rowid ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();

        while let Some(row) = rows.next()? {
            categories.push(parse_category_row(row)?);
        }

        Ok(categories)
    }
}

fn parse_category_row(row: &Row<'_>) -> StoreResult<CategoryOut> {
    let id_text: String = row.get("id")?;
    Ok(CategoryOut {
        id: parse_record_id(&id_text, "categories.id")?,
        name: row.get("name")?,
        created_at: row.get("created_at")?,
    })
}
