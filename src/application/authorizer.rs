use crate::domain::currency::CurrencyAllowList;
use crate::domain::payment::{
    AuthorizationRequest, PaymentOutcome, PaymentStatus, last_four_digits,
};
use crate::domain::ports::{AcquiringBankBox, OutcomeStoreBox};
use crate::domain::validation::ValidationPipeline;
use crate::error::{PaymentError, Result};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

/// The single entry point for card authorizations.
///
/// `PaymentAuthorizer` validates a request, forwards the sanitized version to
/// the acquiring bank, records the outcome and returns it. It holds no
/// per-call state, so one instance can serve many concurrent callers behind an
/// `Arc`. Nothing is retried here.
pub struct PaymentAuthorizer {
    validator: ValidationPipeline,
    bank: AcquiringBankBox,
    outcome_store: OutcomeStoreBox,
}

impl PaymentAuthorizer {
    /// Creates a new `PaymentAuthorizer` instance.
    ///
    /// # Arguments
    ///
    /// * `currencies` - The currencies requests may be made in.
    /// * `bank` - The acquiring bank adapter.
    /// * `outcome_store` - Where processed payments are recorded.
    pub fn new(
        currencies: CurrencyAllowList,
        bank: AcquiringBankBox,
        outcome_store: OutcomeStoreBox,
    ) -> Self {
        Self {
            validator: ValidationPipeline::new(currencies),
            bank,
            outcome_store,
        }
    }

    /// Authorizes `request`, judging card expiry against today's UTC date.
    pub async fn authorize(&self, request: AuthorizationRequest) -> Result<PaymentOutcome> {
        self.authorize_on(request, Utc::now().date_naive()).await
    }

    /// Authorizes `request`, judging card expiry as of `today`.
    ///
    /// Validation failures are returned without calling the bank or writing
    /// anything. Bank failures are returned as-is and nothing is stored.
    pub async fn authorize_on(
        &self,
        request: AuthorizationRequest,
        today: NaiveDate,
    ) -> Result<PaymentOutcome> {
        let id = Uuid::new_v4().to_string();
        tracing::debug!(%id, "authorizing payment");

        let validated = match self.validator.validate(&id, &request, today) {
            Ok(validated) => validated,
            Err(failure) => {
                tracing::info!(
                    %id,
                    field = %failure.field,
                    reason = %failure.reason,
                    "payment rejected"
                );
                return Err(failure.into());
            }
        };

        let gateway_request = validated.to_gateway_request();
        let decision = self.bank.submit(&gateway_request).await.map_err(|err| {
            tracing::warn!(%id, error = %err, "acquiring bank call failed");
            PaymentError::from(err)
        })?;

        let last_four = last_four_digits(&request.card_number).ok_or_else(|| {
            tracing::error!(%id, "validated card number has no readable last four digits");
            PaymentError::Internal(format!("cannot derive last four digits for payment {id}"))
        })?;

        let outcome = PaymentOutcome {
            id,
            status: PaymentStatus::from_bank_decision(decision.authorised),
            last_four_card_digits: last_four,
            expiry_month: request.expiry_month,
            expiry_year: request.expiry_year,
            currency: request.currency,
            amount: request.amount,
        };

        self.outcome_store.insert(outcome.clone()).await?;
        tracing::info!(
            id = %outcome.id,
            status = %outcome.status,
            last_four = outcome.last_four_card_digits,
            "payment processed"
        );
        Ok(outcome)
    }

    /// Looks up a previously processed payment by its identifier.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<PaymentOutcome>> {
        self.outcome_store.find_by_id(id).await
    }
}
