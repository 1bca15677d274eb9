use serde::{Deserialize, Serialize};
use std::fmt;

/// An inbound, untrusted card authorization request.
///
/// Lives only for the duration of one authorization call. `Debug` output masks
/// the card number and omits the CVV so the request can be logged safely.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AuthorizationRequest {
    pub card_number: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub currency: String,
    /// Amount in the minor currency unit.
    pub amount: i64,
    pub cvv: i32,
}

impl fmt::Debug for AuthorizationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizationRequest")
            .field("card_number", &mask_card_number(&self.card_number))
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("currency", &self.currency)
            .field("amount", &self.amount)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Authorized,
    Declined,
    Rejected,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Authorized => "authorized",
            PaymentStatus::Declined => "declined",
            PaymentStatus::Rejected => "rejected",
        }
    }

    /// Maps the bank's authorised flag onto a payment status.
    pub fn from_bank_decision(authorised: bool) -> Self {
        if authorised {
            PaymentStatus::Authorized
        } else {
            PaymentStatus::Declined
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The persisted record of a processed payment.
///
/// Only the last four card digits survive; the full card number and the CVV
/// never reach this type. Outcomes are write-once.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct PaymentOutcome {
    /// Correlation identifier generated for the request.
    pub id: String,
    pub status: PaymentStatus,
    pub last_four_card_digits: u16,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
}

/// Reads the trailing four characters of a card number as an integer.
///
/// Returns `None` when fewer than four characters are present or they are not
/// all digits.
pub fn last_four_digits(card_number: &str) -> Option<u16> {
    let start = card_number.len().checked_sub(4)?;
    let tail = card_number.get(start..)?;
    if !tail.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    tail.parse().ok()
}

fn mask_card_number(card_number: &str) -> String {
    let visible = card_number
        .len()
        .checked_sub(4)
        .and_then(|start| card_number.get(start..))
        .unwrap_or("");
    format!("****{visible}")
}
