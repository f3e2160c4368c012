use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

/// Currency list shipped with the server crate, usable from any working directory.
const DEFAULT_CURRENCY_FILE: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/resources/currencies.csv");

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub currency_file: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("DW_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid DW_LISTEN_ADDR")?;
        let db_path = std::env::var("DW_DB_PATH").unwrap_or_else(|_| "./db/deals.db".into());
        let currency_file = std::env::var("DW_CURRENCY_FILE")
            .unwrap_or_else(|_| DEFAULT_CURRENCY_FILE.into());
        let cors_allow = parse_origins(
            &std::env::var("DW_CORS_ALLOW_ORIGINS").unwrap_or_else(|_| "*".into()),
        );
        let timeout_ms: u64 = std::env::var("DW_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Ok(Self {
            listen_addr,
            db_path,
            currency_file,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
