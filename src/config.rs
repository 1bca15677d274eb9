use crate::domain::currency::CurrencyAllowList;
use crate::domain::ports::AcquiringBankBox;
use crate::error::Result;
use crate::infrastructure::bank_client::HttpAcquiringBank;
use crate::infrastructure::simulated_bank::SimulatedBank;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration, read from the command line with environment
/// fallbacks.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Input CSV file of authorization requests
    pub input: PathBuf,

    /// Acquiring bank base URL. Without it, requests go to the simulated bank.
    #[arg(long, env = "PAYAUTH_BANK_URL")]
    pub bank_url: Option<String>,

    /// Upper bound on a single bank call, in milliseconds
    #[arg(long, env = "PAYAUTH_BANK_TIMEOUT_MS", default_value_t = 5000)]
    pub bank_timeout_ms: u64,

    /// Comma-separated currency codes accepted for payment
    #[arg(
        long,
        env = "PAYAUTH_CURRENCIES",
        value_delimiter = ',',
        default_values_t = CurrencyAllowList::DEFAULT_CODES.map(String::from)
    )]
    pub currencies: Vec<String>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "PAYAUTH_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn bank_timeout(&self) -> Duration {
        Duration::from_millis(self.bank_timeout_ms)
    }

    pub fn currency_allow_list(&self) -> CurrencyAllowList {
        CurrencyAllowList::new(&self.currencies)
    }

    /// Picks the bank adapter: HTTP when a URL is configured, simulated otherwise.
    pub fn build_bank(&self) -> Result<AcquiringBankBox> {
        match &self.bank_url {
            Some(url) => Ok(Box::new(HttpAcquiringBank::new(
                url.clone(),
                self.bank_timeout(),
            )?)),
            None => Ok(Box::new(SimulatedBank::new())),
        }
    }
}
