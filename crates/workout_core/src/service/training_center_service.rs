//! Training center use-case service.

use super::lease::SessionScope;
use crate::controller::TrainingCenterController;
use crate::model::training_center::{TrainingCenterIn, TrainingCenterOut};
use crate::repo::StoreResult;
use crate::session::SessionFactory;

/// Session-scoped wrapper over a `TrainingCenterController`.
pub struct TrainingCenterService<'s, F: SessionFactory, C> {
    scope: SessionScope<'s, F>,
    controller: &'s C,
}

impl<'s, F, C> TrainingCenterService<'s, F, C>
where
    F: SessionFactory,
    C: TrainingCenterController<F::Session>,
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

    pub async fn create(
        &self,
        name: &str,
        address: &str,
        owner: &str,
    ) -> StoreResult<TrainingCenterOut> {
        let input = TrainingCenterIn::new(name, address, owner)?;
        let lease = self.scope.acquire().await?;
        let outcome = self.controller.post(lease.session(), input).await;
        lease.release(outcome).await
    }

    pub async fn get_all(&self) -> StoreResult<Vec<TrainingCenterOut>> {
        let lease = self.scope.acquire().await?;
        let outcome = self.controller.query(lease.session()).await;
        lease.release(outcome).await
    }
}
