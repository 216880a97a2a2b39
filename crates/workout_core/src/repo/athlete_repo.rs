//! Athlete repository contract and SQLite implementation.
//!
//! # Invariants
//! - Category and training center are resolved by exact name; a missing
//!   reference fails with `StoreError::NotFound` and inserts nothing.
//! - `taxpayer_id` is unique across athletes.

use super::category_repo::{CategoryRepository, SqliteCategoryRepository};
use super::training_center_repo::{TrainingCenterRepository, SqliteTrainingCenterRepository};
use super::{map_insert_error, now_epoch_ms, parse_record_id, StoreError, StoreResult};
use crate::model::athlete::{AthleteFilter, AthleteIn, AthleteOut, Sex};
use crate::model::category::CategoryRef;
use crate::model::training_center::TrainingCenterRef;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use uuid::Uuid;

const ENTITY: &str = "athlete";

const ATHLETE_SELECT_SQL: &str = "SELECT
    a.id AS id,
    a.name AS name,
    a.taxpayer_id AS taxpayer_id,
    a.age AS age,
    a.weight AS weight,
    a.height AS height,
    a.sex AS sex,
    c.name AS category_name,
    t.name AS training_center_name,
    a.created_at AS created_at
FROM athletes a
JOIN categories c ON c.id = a.category_id
JOIN training_centers t ON t.id = a.training_center_id";

/// Repository interface for athlete persistence.
pub trait AthleteRepository {
    fn create_athlete(&self, input: &AthleteIn) -> StoreResult<AthleteOut>;
    fn list_athletes(&self, filter: &AthleteFilter) -> StoreResult<Vec<AthleteOut>>;
}

/// SQLite-backed athlete repository.
pub struct SqliteAthleteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAthleteRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AthleteRepository for SqliteAthleteRepository<'_> {
    fn create_athlete(&self, input: &AthleteIn) -> StoreResult<AthleteOut> {
        input.validate()?;

        let category_id = SqliteCategoryRepository::new(self.conn)
            .find_category_id(&input.category.name)?
            .ok_or_else(|| StoreError::NotFound {
                entity: "category",
                name: input.category.name.clone(),
            })?;
        let training_center_id = SqliteTrainingCenterRepository::new(self.conn)
            .find_training_center_id(&input.training_center.name)?
            .ok_or_else(|| StoreError::NotFound {
                entity: "training center",
                name: input.training_center.name.clone(),
            })?;

        let record = AthleteOut {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            taxpayer_id: input.taxpayer_id.clone(),
            age: input.age,
            weight: input.weight,
            height: input.height,
            sex: input.sex,
            category: input.category.clone(),
            training_center: input.training_center.clone(),
            created_at: now_epoch_ms(),
        };
        self.conn
            .execute(
                "INSERT INTO athletes (
                    id,
                    name,
                    taxpayer_id,
                    age,
                    weight,
                    height,
                    sex,
                    category_id,
                    training_center_id,
                    created_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
                params![
                    record.id.to_string(),
                    record.name.as_str(),
                    record.taxpayer_id.as_str(),
                    record.age,
                    record.weight,
                    record.height,
                    record.sex.as_code(),
                    category_id.to_string(),
                    training_center_id.to_string(),
                    record.created_at,
                ],
            )
            .map_err(|err| map_insert_error(err, ENTITY, &record.taxpayer_id))?;

        Ok(record)
    }

    fn list_athletes(&self, filter: &AthleteFilter) -> StoreResult<Vec<AthleteOut>> {
        let mut sql = format!("{ATHLETE_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(name) = filter.name.as_deref() {
            sql.push_str(" AND a.name = ?");
            bind_values.push(Value::Text(name.to_string()));
        }

        sql.push_str(" ORDER BY a.rowid ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut athletes = Vec::new();

        while let Some(row) = rows.next()? {
            athletes.push(parse_athlete_row(row)?);
        }

        Ok(athletes)
    }
}

fn parse_athlete_row(row: &Row<'_>) -> StoreResult<AthleteOut> {
    let id_text: String = row.get("id")?;
    let sex_text: String = row.get("sex")?;
    let sex = sex_text.parse::<Sex>().map_err(|_| {
        StoreError::InvalidData(format!("invalid sex value `{sex_text}` in athletes.sex"))
    })?;

    Ok(AthleteOut {
        id: parse_record_id(&id_text, "athletes.id")?,
        name: row.get("name")?,
        taxpayer_id: row.get("taxpayer_id")?,
        age: row.get("age")?,
        weight: row.get("weight")?,
        height: row.get("height")?,
        sex,
        category: CategoryRef {
            name: row.get("category_name")?,
        },
        training_center: TrainingCenterRef {
            name: row.get("training_center_name")?,
        },
        created_at: row.get("created_at")?,
    })
}
