#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use payauth::domain::gateway::{GatewayDecision, GatewayRequest};
use payauth::domain::payment::AuthorizationRequest;
use payauth::domain::ports::AcquiringBank;
use payauth::error::GatewayError;
use std::io::{Error, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Gateway double that always gives the same answer and counts its calls.
#[derive(Clone)]
pub struct ScriptedBank {
    answer: Result<GatewayDecision, GatewayError>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedBank {
    pub fn approving() -> Self {
        Self::deciding(true)
    }

    pub fn declining() -> Self {
        Self::deciding(false)
    }

    pub fn unavailable() -> Self {
        Self::failing(GatewayError::Unavailable("bank busy".to_string()))
    }

    pub fn failing(err: GatewayError) -> Self {
        Self {
            answer: Err(err),
            calls: Arc::default(),
        }
    }

    fn deciding(authorised: bool) -> Self {
        Self {
            answer: Ok(GatewayDecision {
                authorised,
                authorization_code: "abb53d1a-42dd-4ecc-9a25-dca064d35eb2".to_string(),
            }),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AcquiringBank for ScriptedBank {
    async fn submit(&self, _request: &GatewayRequest) -> Result<GatewayDecision, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }
}

pub fn next_year() -> i32 {
    Utc::now().year() + 1
}

/// A request every validator accepts.
pub fn valid_request() -> AuthorizationRequest {
    AuthorizationRequest {
        card_number: "2222405343248877".to_string(),
        expiry_month: 4,
        expiry_year: next_year(),
        currency: "GBP".to_string(),
        amount: 100,
        cvv: 123,
    }
}

pub fn write_requests_csv<W: Write>(sink: W, rows: &[[&str; 6]]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_writer(sink);
    wtr.write_record([
        "card_number",
        "expiry_month",
        "expiry_year",
        "currency",
        "amount",
        "cvv",
    ])?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
