use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payauth::application::authorizer::PaymentAuthorizer;
use payauth::config::Config;
use payauth::error::PaymentError;
use payauth::infrastructure::in_memory::InMemoryOutcomeStore;
use payauth::interfaces::csv::outcome_writer::OutcomeWriter;
use payauth::interfaces::csv::request_reader::AuthorizationRequestReader;
use std::fs::File;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    // stdout carries the CSV output, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let authorizer = PaymentAuthorizer::new(
        config.currency_allow_list(),
        config.build_bank()?,
        Box::new(InMemoryOutcomeStore::new()),
    );

    let file = File::open(&config.input).into_diagnostic()?;
    let reader = AuthorizationRequestReader::new(file);
    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());

    for request in reader.requests() {
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                tracing::error!(error = %e, "Error reading authorization request");
                continue;
            }
        };

        match authorizer.authorize(request).await {
            Ok(outcome) => writer.write_outcome(&outcome)?,
            Err(PaymentError::Validation(failure)) => writer.write_rejection(&failure)?,
            Err(e) => {
                tracing::error!(kind = ?e.kind(), error = %e, "Error processing payment");
            }
        }
    }

    writer.flush()?;
    Ok(())
}
