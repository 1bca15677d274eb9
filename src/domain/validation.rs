use super::currency::CurrencyAllowList;
use super::gateway::{GatewayRequest, format_expiry_date};
use super::payment::AuthorizationRequest;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

pub const CARD_NUMBER_LENGTH: RangeInclusive<usize> = 14..=19;
pub const CVV_RANGE: RangeInclusive<i32> = 100..=9999;

/// The request field a validator rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CardNumber,
    ExpiryMonth,
    ExpiryYear,
    Currency,
    Amount,
    Cvv,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CardNumber => "card_number",
            Field::ExpiryMonth => "expiry_month",
            Field::ExpiryYear => "expiry_year",
            Field::Currency => "currency",
            Field::Amount => "amount",
            Field::Cvv => "cvv",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request rejected before reaching the bank.
///
/// Carries the correlation identifier generated for the request so a rejected
/// payment can be referenced exactly like a processed one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct ValidationFailure {
    pub id: String,
    pub field: Field,
    pub reason: String,
}

impl ValidationFailure {
    pub fn new(id: impl Into<String>, field: Field, reason: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            field,
            reason: reason.into(),
        }
    }
}

/// A request that passed every validator, with the values derived on the way.
#[derive(Debug)]
pub struct ValidatedRequest<'a> {
    pub request: &'a AuthorizationRequest,
    pub expiry_date: String,
}

impl ValidatedRequest<'_> {
    pub fn to_gateway_request(&self) -> GatewayRequest {
        GatewayRequest {
            card_number: self.request.card_number.clone(),
            expiry_date: self.expiry_date.clone(),
            currency: self.request.currency.clone(),
            amount: self.request.amount,
            cvv: self.request.cvv.to_string(),
        }
    }
}

type Check<T> = std::result::Result<T, (Field, &'static str)>;

/// The ordered validation chain run before any bank call.
///
/// Validators run card number, expiry, currency, amount, CVV, and the first
/// failure wins. When several fields are invalid only the earliest is reported.
#[derive(Debug, Clone, Default)]
pub struct ValidationPipeline {
    currencies: CurrencyAllowList,
}

impl ValidationPipeline {
    pub fn new(currencies: CurrencyAllowList) -> Self {
        Self { currencies }
    }

    pub fn currencies(&self) -> &CurrencyAllowList {
        &self.currencies
    }

    /// Validates `request` as of `today`, tagging any failure with `id`.
    pub fn validate<'a>(
        &self,
        id: &str,
        request: &'a AuthorizationRequest,
        today: NaiveDate,
    ) -> Result<ValidatedRequest<'a>, ValidationFailure> {
        self.run(request, today)
            .map_err(|(field, reason)| ValidationFailure::new(id, field, reason))
    }

    fn run<'a>(
        &self,
        request: &'a AuthorizationRequest,
        today: NaiveDate,
    ) -> Check<ValidatedRequest<'a>> {
        check_card_number(&request.card_number)?;
        let expiry_date = check_expiry(request.expiry_month, request.expiry_year, today)?;
        check_currency(&request.currency, &self.currencies)?;
        check_amount(request.amount)?;
        check_cvv(request.cvv)?;
        Ok(ValidatedRequest {
            request,
            expiry_date,
        })
    }
}

fn check_card_number(card_number: &str) -> Check<()> {
    if !CARD_NUMBER_LENGTH.contains(&card_number.len()) {
        return Err((Field::CardNumber, "incorrect card length"));
    }
    if !card_number.bytes().all(|b| b.is_ascii_digit()) {
        return Err((Field::CardNumber, "card number must contain only digits"));
    }
    Ok(())
}

/// A card expiring this month is still valid.
fn check_expiry(month: i32, year: i32, today: NaiveDate) -> Check<String> {
    if !(1..=12).contains(&month) {
        return Err((Field::ExpiryMonth, "invalid expiry month"));
    }
    if year < today.year() {
        return Err((Field::ExpiryYear, "year in past"));
    }
    if year == today.year() && month < today.month() as i32 {
        return Err((Field::ExpiryMonth, "month in past"));
    }
    Ok(format_expiry_date(month, year))
}

fn check_currency(currency: &str, allowed: &CurrencyAllowList) -> Check<()> {
    if allowed.contains(currency) {
        Ok(())
    } else {
        Err((Field::Currency, "unsupported currency"))
    }
}

fn check_amount(amount: i64) -> Check<()> {
    if amount > 0 {
        Ok(())
    } else {
        Err((Field::Amount, "invalid amount"))
    }
}

fn check_cvv(cvv: i32) -> Check<()> {
    if CVV_RANGE.contains(&cvv) {
        Ok(())
    } else {
        Err((Field::Cvv, "invalid cvv"))
    }
}
