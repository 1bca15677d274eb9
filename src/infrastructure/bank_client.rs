use crate::domain::gateway::{GatewayDecision, GatewayRequest};
use crate::domain::ports::AcquiringBank;
use crate::error::{GatewayError, PaymentError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Acquiring bank reached over HTTP.
///
/// Posts the wire request as JSON to `{base_url}/payments`. A 503 or an
/// unreachable bank is reported as [`GatewayError::Unavailable`]; timeouts,
/// other statuses and undecodable bodies as [`GatewayError::Unclassified`].
pub struct HttpAcquiringBank {
    /// Bank base URL without a trailing slash.
    base_url: String,
    client: Client,
}

impl HttpAcquiringBank {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Builds a client bounded by `timeout` for the whole request.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|err| PaymentError::Internal(format!("cannot build HTTP client: {err}")))?;
        let mut base_url = base_url.into();
        let trimmed_len = base_url.trim_end_matches('/').len();
        base_url.truncate(trimmed_len);
        Ok(Self { base_url, client })
    }

    pub fn payments_url(&self) -> String {
        format!("{}/payments", self.base_url)
    }
}

#[async_trait]
impl AcquiringBank for HttpAcquiringBank {
    async fn submit(
        &self,
        request: &GatewayRequest,
    ) -> std::result::Result<GatewayDecision, GatewayError> {
        let url = self.payments_url();
        tracing::debug!(%url, "submitting authorization to acquiring bank");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        match response.status() {
            StatusCode::OK => response.json::<GatewayDecision>().await.map_err(|err| {
                GatewayError::Unclassified(format!("failed to decode bank response: {err}"))
            }),
            StatusCode::SERVICE_UNAVAILABLE => Err(GatewayError::Unavailable(
                "acquiring bank returned 503".to_string(),
            )),
            status => Err(GatewayError::Unclassified(format!(
                "unexpected bank response status {status}"
            ))),
        }
    }
}

fn classify_transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Unclassified(format!("bank request timed out: {err}"))
    } else if err.is_connect() {
        GatewayError::Unavailable(format!("cannot reach acquiring bank: {err}"))
    } else {
        GatewayError::Unclassified(format!("bank request failed: {err}"))
    }
}
