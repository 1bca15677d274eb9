use serde::{Deserialize, Serialize};
use std::fmt;

/// The sanitized request sent to the acquiring bank.
///
/// Built once per accepted authorization and never retained.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayRequest {
    pub card_number: String,
    /// Formatted as `<month>/<year>`, e.g. `4/2025`.
    pub expiry_date: String,
    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

impl fmt::Debug for GatewayRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayRequest")
            .field("expiry_date", &self.expiry_date)
            .field("currency", &self.currency)
            .field("amount", &self.amount)
            .finish_non_exhaustive()
    }
}

/// The bank's answer to a [`GatewayRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayDecision {
    #[serde(alias = "authorized")]
    pub authorised: bool,
    #[serde(default)]
    pub authorization_code: String,
}

/// Formats an expiry the way the bank expects it.
pub fn format_expiry_date(month: i32, year: i32) -> String {
    format!("{month}/{year}")
}
