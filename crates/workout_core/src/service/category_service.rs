//! Category use-case service.

use super::lease::SessionScope;
use crate::controller::CategoryController;
use crate::model::category::{CategoryIn, CategoryOut};
use crate::repo::StoreResult;
use crate::session::SessionFactory;

/// Session-scoped wrapper over a `CategoryController`.
pub struct CategoryService<'s, F: SessionFactory, C> {
    scope: SessionScope<'s, F>,
    controller: &'s C,
}

impl<'s, F, C> CategoryService<'s, F, C>
where
    F: SessionFactory,
    C: CategoryController<F::Session>,
{
    /// Creates a service that opens its own session per operation.
    pub fn new(factory: &'s F, controller: &'s C) -> Self {
        Self {
            scope: SessionScope::new(factory, None),
            controller,
        }
    }

    /// Runs every operation on `session` and never closes it.
    pub fn with_session(mut self, session: &'s F::Session) -> Self {
        self.scope = self.scope.with_session(session);
        self
    }

    /// Creates a category named `name`.
    pub async fn create(&self, name: &str) -> StoreResult<CategoryOut> {
        let input = CategoryIn::new(name)?;
        let lease = self.scope.acquire().await?;
        let outcome = self.controller.post(lease.session(), input).await;
        lease.release(outcome).await
    }

    /// Lists all categories.
    pub async fn get_all(&self) -> StoreResult<Vec<CategoryOut>> {
        let lease = self.scope.acquire().await?;
        let outcome = self.controller.query(lease.session()).await;
        lease.release(outcome).await
    }
}
