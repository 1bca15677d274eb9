use super::gateway::{GatewayDecision, GatewayRequest};
use super::payment::PaymentOutcome;
use crate::error::{GatewayError, Result};
use async_trait::async_trait;

/// Write-once storage for processed payments.
///
/// Implementations must be safe to share across concurrent authorizations:
/// each insert is atomic and a lookup observes every insert that completed
/// before it. Identifiers are not deduplicated.
#[async_trait]
pub trait OutcomeStore: Send + Sync {
    async fn insert(&self, outcome: PaymentOutcome) -> Result<()>;
    async fn find_by_id(&self, id: &str) -> Result<Option<PaymentOutcome>>;
    async fn count(&self) -> Result<usize>;
}

/// The acquiring bank, reached over whatever transport the adapter chooses.
#[async_trait]
pub trait AcquiringBank: Send + Sync {
    async fn submit(
        &self,
        request: &GatewayRequest,
    ) -> std::result::Result<GatewayDecision, GatewayError>;
}

pub type OutcomeStoreBox = Box<dyn OutcomeStore>;
pub type AcquiringBankBox = Box<dyn AcquiringBank>;
