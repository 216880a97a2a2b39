//! Training center repository contract and SQLite implementation.

use super::{map_insert_error, now_epoch_ms, parse_record_id, StoreResult};
use crate::model::training_center::{TrainingCenterIn, TrainingCenterOut};
use crate::model::RecordId;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

const ENTITY: &str = "training center";

/// Repository interface for training center persistence.
pub trait TrainingCenterRepository {
    fn create_training_center(&self, input: &TrainingCenterIn) -> StoreResult<TrainingCenterOut>;
    fn find_training_center_id(&self, name: &str) -> StoreResult<Option<RecordId>>;
    fn list_training_centers(&self) -> StoreResult<Vec<TrainingCenterOut>>;
}

/// SQLite-backed training center repository.
pub struct SqliteTrainingCenterRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTrainingCenterRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TrainingCenterRepository for SqliteTrainingCenterRepository<'_> {
    fn create_training_center(&self, input: &TrainingCenterIn) -> StoreResult<TrainingCenterOut> {
        input.validate()?;

        let record = TrainingCenterOut {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            address: input.address.clone(),
            owner: input.owner.clone(),
            created_at: now_epoch_ms(),
        };
        self.conn
            .execute(
                "INSERT INTO training_centers (id, name, address, owner, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5);",
                params![
                    record.id.to_string(),
                    record.name.as_str(),
                    record.address.as_str(),
                    record.owner.as_str(),
                    record.created_at,
                ],
            )
            .map_err(|err| map_insert_error(err, ENTITY, &record.name))?;

        Ok(record)
    }

    fn find_training_center_id(&self, name: &str) -> StoreResult<Option<RecordId>> {
        let id_text = self
            .conn
            .query_row(
                "SELECT id FROM training_centers WHERE name = ?1;",
                [name],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        id_text
            .map(|value| parse_record_id(&value, "training_centers.id"))
            .transpose()
    }

    fn list_training_centers(&self) -> StoreResult<Vec<TrainingCenterOut>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, address, owner, created_at
             FROM training_centers
             ORDER BY rowid ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut centers = Vec::new();

        while let Some(row) = rows.next()? {
            centers.push(parse_training_center_row(row)?);
        }

        Ok(centers)
    }
}

fn parse_training_center_row(row: &Row<'_>) -> StoreResult<TrainingCenterOut> {
    let id_text: String = row.get("id")?;
    Ok(TrainingCenterOut {
        id: parse_record_id(&id_text, "training_centers.id")?,
        name: row.get("name")?,
        address: row.get("address")?,
        owner: row.get("owner")?,
        created_at: row.get("created_at")?,
    })
}
