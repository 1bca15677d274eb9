use crate::domain::payment::PaymentOutcome;
use crate::domain::ports::OutcomeStore;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for payment outcomes.
///
/// Keeps outcomes in insertion order behind an `Arc<RwLock<Vec<_>>>`, so clones
/// share the same records. Nothing survives a restart.
#[derive(Default, Clone)]
pub struct InMemoryOutcomeStore {
    outcomes: Arc<RwLock<Vec<PaymentOutcome>>>,
}

impl InMemoryOutcomeStore {
    /// Creates a new, empty in-memory outcome store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OutcomeStore for InMemoryOutcomeStore {
    async fn insert(&self, outcome: PaymentOutcome) -> Result<()> {
        let mut outcomes = self.outcomes.write().await;
        outcomes.push(outcome);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<PaymentOutcome>> {
        let outcomes = self.outcomes.read().await;
        Ok(outcomes.iter().find(|outcome| outcome.id == id).cloned())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.outcomes.read().await.len())
    }
}
