//! SQLite controller backed by the repository layer.

use super::{AthleteController, CategoryController, TrainingCenterController};
use crate::model::athlete::{AthleteFilter, AthleteIn, AthleteOut};
use crate::model::category::{CategoryIn, CategoryOut};
use crate::model::training_center::{TrainingCenterIn, TrainingCenterOut};
use crate::repo::athlete_repo::{AthleteRepository, SqliteAthleteRepository};
use crate::repo::category_repo::{CategoryRepository, SqliteCategoryRepository};
use crate::repo::training_center_repo::{
    SqliteTrainingCenterRepository, TrainingCenterRepository,
};
use crate::repo::StoreResult;
use crate::session::SqliteSession;
use async_trait::async_trait;
use log::{info, warn};

/// Stateless controller executing store operations on a `SqliteSession`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteController;

#[async_trait]
impl CategoryController<SqliteSession> for SqliteController {
    async fn post(&self, session: &SqliteSession, input: CategoryIn) -> StoreResult<CategoryOut> {
        let result = session
            .with_connection(|conn| SqliteCategoryRepository::new(conn).create_category(&input));
        log_post("category", session, &result);
        result
    }

    async fn query(&self, session: &SqliteSession) -> StoreResult<Vec<CategoryOut>> {
        session.with_connection(|conn| SqliteCategoryRepository::new(conn).list_categories())
    }
}

#[async_trait]
impl TrainingCenterController<SqliteSession> for SqliteController {
    async fn post(
        &self,
        session: &SqliteSession,
        input: TrainingCenterIn,
    ) -> StoreResult<TrainingCenterOut> {
        let result = session.with_connection(|conn| {
            SqliteTrainingCenterRepository::new(conn).create_training_center(&input)
        });
        log_post("training_center", session, &result);
        result
    }

    async fn query(&self, session: &SqliteSession) -> StoreResult<Vec<TrainingCenterOut>> {
        session.with_connection(|conn| {
            SqliteTrainingCenterRepository::new(conn).list_training_centers()
        })
    }
}

#[async_trait]
impl AthleteController<SqliteSession> for SqliteController {
    async fn post(&self, session: &SqliteSession, input: AthleteIn) -> StoreResult<AthleteOut> {
        let result = session
            .with_connection(|conn| SqliteAthleteRepository::new(conn).create_athlete(&input));
        log_post("athlete", session, &result);
        result
    }

    async fn query(
        &self,
        session: &SqliteSession,
        filter: AthleteFilter,
    ) -> StoreResult<Vec<AthleteOut>> {
        session.with_connection(|conn| SqliteAthleteRepository::new(conn).list_athletes(&filter))
    }
}

fn log_post<T>(entity: &str, session: &SqliteSession, result: &StoreResult<T>) {
    match result {
        Ok(_) => info!(
            "event=entity_create module=controller status=ok entity={} session_id={}",
            entity,
            session.session_id()
        ),
        Err(err) => warn!(
            "event=entity_create module=controller status=error entity={} session_id={} error={}",
            entity,
            session.session_id(),
            err
        ),
    }
}
