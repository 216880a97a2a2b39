//! Free-function forms of the service operations.
//!
//! Each call builds a one-shot service; a `Some(session)` argument is
//! borrowed and left open.

use super::athlete_service::{AthleteService, NewAthlete};
use super::category_service::CategoryService;
use super::training_center_service::TrainingCenterService;
use crate::controller::{AthleteController, CategoryController, TrainingCenterController};
use crate::model::athlete::AthleteOut;
use crate::model::category::CategoryOut;
use crate::model::training_center::TrainingCenterOut;
use crate::repo::StoreResult;
use crate::session::SessionFactory;

pub async fn create_category<F, C>(
    factory: &F,
    controller: &C,
    name: &str,
    session: Option<&F::Session>,
) -> StoreResult<CategoryOut>
where
    F: SessionFactory,
    C: CategoryController<F::Session>,
{
    let service = CategoryService::new(factory, controller);
    match session {
        Some(session) => service.with_session(session).create(name).await,
        None => service.create(name).await,
    }
}

pub async fn get_all_categories<F, C>(
    factory: &F,
    controller: &C,
    session: Option<&F::Session>,
) -> StoreResult<Vec<CategoryOut>>
where
    F: SessionFactory,
    C: CategoryController<F::Session>,
{
    let service = CategoryService::new(factory, controller);
    match session {
        Some(session) => service.with_session(session).get_all().await,
        None => service.get_all().await,
    }
}

pub async fn create_training_center<F, C>(
    factory: &F,
    controller: &C,
    name: &str,
    address: &str,
    owner: &str,
    session: Option<&F::Session>,
) -> StoreResult<TrainingCenterOut>
where
    F: SessionFactory,
    C: TrainingCenterController<F::Session>,
{
    let service = TrainingCenterService::new(factory, controller);
    match session {
        Some(session) => {
            service
                .with_session(session)
                .create(name, address, owner)
                .await
        }
        None => service.create(name, address, owner).await,
    }
}

pub async fn get_all_training_centers<F, C>(
    factory: &F,
    controller: &C,
    session: Option<&F::Session>,
) -> StoreResult<Vec<TrainingCenterOut>>
where
    F: SessionFactory,
    C: TrainingCenterController<F::Session>,
{
    let service = TrainingCenterService::new(factory, controller);
    match session {
        Some(session) => service.with_session(session).get_all().await,
        None => service.get_all().await,
    }
}

pub async fn create_athlete<F, C>(
    factory: &F,
    controller: &C,
    athlete: &NewAthlete,
    session: Option<&F::Session>,
) -> StoreResult<AthleteOut>
where
    F: SessionFactory,
    C: AthleteController<F::Session>,
{
    let service = AthleteService::new(factory, controller);
    match session {
        Some(session) => service.with_session(session).create(athlete).await,
        None => service.create(athlete).await,
    }
}

pub async fn get_all_athletes<F, C>(
    factory: &F,
    controller: &C,
    session: Option<&F::Session>,
) -> StoreResult<Vec<AthleteOut>>
where
    F: SessionFactory,
    C: AthleteController<F::Session>,
{
    let service = AthleteService::new(factory, controller);
    match session {
        Some(session) => service.with_session(session).get_all(None).await,
        None => service.get_all(None).await,
    }
}
