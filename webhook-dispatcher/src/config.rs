use anyhow::{bail, Result};
use envconfig::Envconfig;
use http::StatusCode;
use std::{
    fmt::{Display, Formatter},
    net::SocketAddr,
};

const RESERVED_PATHS: [&str; 2] = ["/healthz", "/metrics"];

#[derive(Envconfig, Clone, Debug)]
pub struct WebhookConfig {
    #[envconfig(from = "SERVER_ADDRESS", default = "0.0.0.0:3000")]
    pub address: SocketAddr,
    #[envconfig(from = "WEBHOOK_PATH", default = "/webhooks")]
    pub webhook_path: String,
    #[envconfig(from = "BODY_LIMIT_BYTES", default = "1048576")]
    pub body_limit_bytes: usize,
    /// Status returned when the body is not JSON. The gateway historically
    /// received a 200 here, so that stays the default.
    #[envconfig(from = "MALFORMED_PAYLOAD_STATUS", default = "200")]
    pub malformed_payload_status: u16,
    #[envconfig(from = "METRICS_ENABLED", default = "true")]
    pub metrics_enabled: bool,
    #[envconfig(from = "LOG_LEVEL", default = "info")]
    pub log_level: String,
}

impl WebhookConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.webhook_path.starts_with('/') {
            bail!(
                "WEBHOOK_PATH must start with '/', provided path is {}",
                self.webhook_path
            );
        }

        if RESERVED_PATHS.contains(&self.webhook_path.as_str()) {
            bail!("WEBHOOK_PATH {} is reserved", self.webhook_path);
        }

        if StatusCode::from_u16(self.malformed_payload_status).is_err() {
            bail!(
                "MALFORMED_PAYLOAD_STATUS must be a valid HTTP status code, provided {}",
                self.malformed_payload_status
            );
        }

        Ok(())
    }

    pub fn malformed_payload_status(&self) -> StatusCode {
        StatusCode::from_u16(self.malformed_payload_status).unwrap_or(StatusCode::OK)
    }
}

impl Display for WebhookConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SERVER_ADDRESS: {}", self.address)?;
        writeln!(f, "WEBHOOK_PATH: {}", self.webhook_path)?;
        writeln!(f, "BODY_LIMIT_BYTES: {}", self.body_limit_bytes)?;
        writeln!(
            f,
            "MALFORMED_PAYLOAD_STATUS: {}",
            self.malformed_payload_status
        )?;
        writeln!(f, "METRICS_ENABLED: {}", self.metrics_enabled)?;
        writeln!(f, "LOG_LEVEL: {}", self.log_level)
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            webhook_path: "/webhooks".to_owned(),
            body_limit_bytes: 1024 * 1024,
            malformed_payload_status: 200,
            metrics_enabled: true,
            log_level: "info".to_owned(),
        }
    }
}
