use crate::domain::payment::{PaymentOutcome, PaymentStatus};
use crate::domain::validation::ValidationFailure;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct OutcomeRow<'a> {
    id: &'a str,
    status: PaymentStatus,
    last_four_card_digits: Option<u16>,
    expiry_month: Option<i32>,
    expiry_year: Option<i32>,
    currency: Option<&'a str>,
    amount: Option<i64>,
}

/// Writes payment outcomes as CSV rows.
///
/// Processed payments produce full rows. A rejected request produces a row
/// with only its correlation id and the `rejected` status.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_outcome(&mut self, outcome: &PaymentOutcome) -> Result<()> {
        self.writer.serialize(OutcomeRow {
            id: &outcome.id,
            status: outcome.status,
            last_four_card_digits: Some(outcome.last_four_card_digits),
            expiry_month: Some(outcome.expiry_month),
            expiry_year: Some(outcome.expiry_year),
            currency: Some(&outcome.currency),
            amount: Some(outcome.amount),
        })?;
        Ok(())
    }

    pub fn write_rejection(&mut self, failure: &ValidationFailure) -> Result<()> {
        self.writer.serialize(OutcomeRow {
            id: &failure.id,
            status: PaymentStatus::Rejected,
            last_four_card_digits: None,
            expiry_month: None,
            expiry_year: None,
            currency: None,
            amount: None,
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
