//! Athlete use-case service.
//!
//! # Contract
//! - `create` turns category and training center names into by-name
//!   references; how they resolve is up to the controller.

use super::lease::SessionScope;
use crate::controller::AthleteController;
use crate::model::athlete::{AthleteFilter, AthleteIn, AthleteOut, Sex};
use crate::model::category::CategoryRef;
use crate::model::training_center::TrainingCenterRef;
use crate::model::ValidationError;
use crate::repo::StoreResult;
use crate::session::SessionFactory;
use serde::{Deserialize, Serialize};

/// Request model for creating an athlete with by-name associations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAthlete {
    pub name: String,
    pub taxpayer_id: String,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub sex: Sex,
    pub category_name: String,
    pub training_center_name: String,
}

impl NewAthlete {
    /// Builds the validated store input.
    pub fn to_input(&self) -> Result<AthleteIn, ValidationError> {
        let input = AthleteIn {
            name: self.name.trim().to_string(),
            taxpayer_id: self.taxpayer_id.trim().to_string(),
            age: self.age,
            weight: self.weight,
            height: self.height,
            sex: self.sex,
            category: CategoryRef::new(self.category_name.as_str())?,
            training_center: TrainingCenterRef::new(self.training_center_name.as_str())?,
        };
        input.validate()?;
        Ok(input)
    }
}

/// Session-scoped wrapper over an `AthleteController`.
pub struct AthleteService<'s, F: SessionFactory, C> {
    scope: SessionScope<'s, F>,
    controller: &'s C,
}

impl<'s, F, C> AthleteService<'s, F, C>
where
    F: SessionFactory,
    C: AthleteController<F::Session>,
{
    pub fn new(factory: &'s F, controller: &'s C) -> Self {
        Self {
            scope: SessionScope::new(factory, None),
            controller,
        }
    }

    pub fn with_session(mut self, session: &'s F::Session) -> Self {
        self.scope = self.scope.with_session(session);
        self
    }

    /// Creates an athlete linked to an existing category and training center.
    pub async fn create(&self, athlete: &NewAthlete) -> StoreResult<AthleteOut> {
        let input = athlete.to_input()?;
        let lease = self.scope.acquire().await?;
        let outcome = self.controller.post(lease.session(), input).await;
        lease.release(outcome).await
    }

    /// Lists athletes, optionally only those named exactly `name`.
    pub async fn get_all(&self, name: Option<&str>) -> StoreResult<Vec<AthleteOut>> {
        let filter = match name {
            Some(name) => AthleteFilter::by_name(name),
            None => AthleteFilter::default(),
        };
        let lease = self.scope.acquire().await?;
        let outcome = self.controller.query(lease.session(), filter).await;
        lease.release(outcome).await
    }
}
