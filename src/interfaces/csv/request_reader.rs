use crate::domain::payment::AuthorizationRequest;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads authorization requests from a CSV source.
///
/// Expects the columns `card_number, expiry_month, expiry_year, currency,
/// amount, cvv`. Whitespace around fields is trimmed and card numbers are read
/// as text so leading zeros survive.
pub struct AuthorizationRequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> AuthorizationRequestReader<R> {
    /// Wraps `source` in a CSV reader that trims every field before decoding.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    ///
    /// A malformed row yields an error for that row only; iteration continues.
    pub fn requests(self) -> impl Iterator<Item = Result<AuthorizationRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}
