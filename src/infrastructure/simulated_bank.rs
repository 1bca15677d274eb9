use crate::domain::gateway::{GatewayDecision, GatewayRequest};
use crate::domain::ports::AcquiringBank;
use crate::error::GatewayError;
use async_trait::async_trait;
use uuid::Uuid;

/// In-process stand-in for the acquiring bank.
///
/// Decides on the final card digit: `0` means the bank is unavailable, odd
/// digits are authorized and even digits are declined.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedBank;

impl SimulatedBank {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AcquiringBank for SimulatedBank {
    async fn submit(
        &self,
        request: &GatewayRequest,
    ) -> std::result::Result<GatewayDecision, GatewayError> {
        let digit = request
            .card_number
            .bytes()
            .last()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .ok_or_else(|| {
                GatewayError::Unclassified("card number does not end in a digit".to_string())
            })?;

        match digit {
            0 => Err(GatewayError::Unavailable(
                "simulated bank is unavailable".to_string(),
            )),
            d if d % 2 == 1 => Ok(GatewayDecision {
                authorised: true,
                authorization_code: Uuid::new_v4().to_string(),
            }),
            _ => Ok(GatewayDecision {
                authorised: false,
                authorization_code: String::new(),
            }),
        }
    }
}
