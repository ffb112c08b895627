//! Configuration loading from environment.

use std::env;

use anyhow::Context;
use mock_bank::MockBank;

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub bank_failure_rate: f64,
    /// OTLP collector endpoint; span export is disabled when unset.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => 8000,
        };

        let bank_failure_rate = match lookup("MOCK_BANK_FAILURE_RATE") {
            Some(raw) => {
                let rate: f64 = raw.parse().with_context(|| {
                    format!("MOCK_BANK_FAILURE_RATE must be a number, got {raw:?}")
                })?;
                // Range check lives in the bank; surface it here as a startup error.
                MockBank::with_failure_rate(rate)?;
                rate
            }
            None => MockBank::DEFAULT_FAILURE_RATE,
        };

        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.trim().is_empty());

        Ok(Self {
            host,
            port,
            bank_failure_rate,
            otlp_endpoint,
        })
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
