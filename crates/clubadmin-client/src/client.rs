//! clubadmin client implementation

use clubadmin_core::Resource;
use reqwest::Client;

use crate::Result;
use crate::config::ClientConfig;
use crate::http::HttpGateway;

/// Shared HTTP client for one backend, handing out typed gateways.
#[derive(Debug, Clone)]
pub struct ClubAdminClient {
    http: Client,
    config: ClientConfig,
}

impl ClubAdminClient {
    /// Create a new client instance
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = Client::builder().timeout(config.timeout()).build()?;
        tracing::info!(server_url = %config.base_url(), "Client ready");
        Ok(Self { http, config })
    }

    /// Configuration this client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Gateway for resource `R`, sharing this client's connection pool.
    pub fn gateway<R: Resource>(&self) -> HttpGateway<R> {
        HttpGateway::new(self.http.clone(), self.config.base_url())
    }
}
