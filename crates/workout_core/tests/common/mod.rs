#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;
use workout_core::{
    AthleteController, AthleteFilter, AthleteIn, AthleteOut, CategoryController, CategoryIn,
    CategoryOut, Session, SessionFactory, StoreError, StoreResult, TrainingCenterController,
    TrainingCenterIn, TrainingCenterOut,
};

/// Session that counts how many times it was closed.
pub struct MockSession {
    closes: Arc<AtomicUsize>,
    fail_close: bool,
}

impl MockSession {
    pub fn new(closes: Arc<AtomicUsize>) -> Self {
        Self {
            closes,
            fail_close: false,
        }
    }
}

#[async_trait]
impl Session for MockSession {
    async fn close(self) -> StoreResult<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        if self.fail_close {
            return Err(StoreError::InvalidData("close failed".to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MockFactory {
    pub opens: AtomicUsize,
    pub closes: Arc<AtomicUsize>,
    pub fail_open: bool,
    pub fail_close: bool,
}

impl MockFactory {
    pub fn failing() -> Self {
        Self {
            fail_open: true,
            ..Self::default()
        }
    }

    /// Opens sessions normally but every `close` errors.
    pub fn failing_close() -> Self {
        Self {
            fail_close: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionFactory for MockFactory {
    type Session = MockSession;

    async fn open(&self) -> StoreResult<MockSession> {
        if self.fail_open {
            return Err(StoreError::InvalidData("connection refused".to_string()));
        }
        self.opens.fetch_add(1, Ordering::SeqCst);
        Ok(MockSession {
            closes: Arc::clone(&self.closes),
            fail_close: self.fail_close,
        })
    }
}

/// Controller that fails for configured names and echoes everything else.
#[derive(Default)]
pub struct MockController {
    pub failing_names: HashSet<String>,
    pub fail_queries: bool,
    pub posts: AtomicUsize,
}

impl MockController {
    pub fn failing_for(names: &[&str]) -> Self {
        Self {
            failing_names: names.iter().map(|name| (*name).to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn failing_queries() -> Self {
        Self {
            fail_queries: true,
            ..Self::default()
        }
    }

    pub fn posted(&self) -> usize {
        self.posts.load(Ordering::SeqCst)
    }

    fn check(&self, name: &str) -> StoreResult<()> {
        self.posts.fetch_add(1, Ordering::SeqCst);
        if self.failing_names.contains(name) {
            return Err(simulated_failure(name));
        }
        Ok(())
    }

    fn check_query(&self) -> StoreResult<()> {
        if self.fail_queries {
            return Err(simulated_failure("query"));
        }
        Ok(())
    }
}

pub fn simulated_failure(name: &str) -> StoreError {
    StoreError::InvalidData(format!("simulated failure for `{name}`"))
}

#[async_trait]
impl CategoryController<MockSession> for MockController {
    async fn post(&self, _session: &MockSession, input: CategoryIn) -> StoreResult<CategoryOut> {
        self.check(&input.name)?;
        Ok(CategoryOut {
            id: Uuid::new_v4(),
            name: input.name,
            created_at: 0,
        })
    }

    async fn query(&self, _session: &MockSession) -> StoreResult<Vec<CategoryOut>> {
        self.check_query()?;
        Ok(Vec::new())
    }
}

#[async_trait]
impl TrainingCenterController<MockSession> for MockController {
    async fn post(
        &self,
        _session: &MockSession,
        input: TrainingCenterIn,
    ) -> StoreResult<TrainingCenterOut> {
        self.check(&input.name)?;
        Ok(TrainingCenterOut {
            id: Uuid::new_v4(),
            name: input.name,
            address: input.address,
            owner: input.owner,
            created_at: 0,
        })
    }

    async fn query(&self, _session: &MockSession) -> StoreResult<Vec<TrainingCenterOut>> {
        self.check_query()?;
        Ok(Vec::new())
    }
}

#[async_trait]
impl AthleteController<MockSession> for MockController {
    async fn post(&self, _session: &MockSession, input: AthleteIn) -> StoreResult<AthleteOut> {
        self.check(&input.name)?;
        Ok(AthleteOut {
            id: Uuid::new_v4(),
            name: input.name,
            taxpayer_id: input.taxpayer_id,
            age: input.age,
            weight: input.weight,
            height: input.height,
            sex: input.sex,
            category: input.category,
            training_center: input.training_center,
            created_at: 0,
        })
    }

    async fn query(
        &self,
        _session: &MockSession,
        _filter: AthleteFilter,
    ) -> StoreResult<Vec<AthleteOut>> {
        self.check_query()?;
        Ok(Vec::new())
    }
}
