//! Store operations per entity kind, executed against a session.
//!
//! # Responsibility
//! - Define the `post`/`query` contracts the service layer delegates to.
//! - Keep resolution policy (e.g. by-name athlete references) out of the
//!   service layer.
//!
//! # Invariants
//! - Controllers never close the session they are given.
//! - A failed `post` leaves no partial record behind.

use crate::model::athlete::{AthleteFilter, AthleteIn, AthleteOut};
use crate::model::category::{CategoryIn, CategoryOut};
use crate::model::training_center::{TrainingCenterIn, TrainingCenterOut};
use crate::repo::StoreResult;
use async_trait::async_trait;

mod sqlite;

pub use sqlite::SqliteController;

#[async_trait]
pub trait CategoryController<S: Sync>: Send + Sync {
    async fn post(&self, session: &S, input: CategoryIn) -> StoreResult<CategoryOut>;
    async fn query(&self, session: &S) -> StoreResult<Vec<CategoryOut>>;
}

#[async_trait]
pub trait TrainingCenterController<S: Sync>: Send + Sync {
    async fn post(&self, session: &S, input: TrainingCenterIn) -> StoreResult<TrainingCenterOut>;
    async fn query(&self, session: &S) -> StoreResult<Vec<TrainingCenterOut>>;
}

/// Athlete store operations.
///
/// `post` resolves `input.category` and `input.training_center` by name.
#[async_trait]
pub trait AthleteController<S: Sync>: Send + Sync {
    async fn post(&self, session: &S, input: AthleteIn) -> StoreResult<AthleteOut>;
    async fn query(&self, session: &S, filter: AthleteFilter) -> StoreResult<Vec<AthleteOut>>;
}
