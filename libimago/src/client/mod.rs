//! Shared HTTP plumbing for registry adapters.
//!
//! One `reqwest` client (and its connection pool) is shared read-only
//! across all concurrent lookups. [`Client::get_json`] performs a single
//! GET with a per-request timeout and classifies the outcome so that the
//! adapters can keep their mapping to availability values thin. There are
//! no retries at this layer.

use crate::error::{ImagoError, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client as ReqwestClient, StatusCode};
use serde_json::Value;
use std::time::Duration;


/// Classified outcome of a single JSON GET.
///
/// The split between `Status`/`Malformed` and `Transport` matters: the
/// former means the registry answered badly (reported as `Error`), the
/// latter means it could not be asked at all (reported as `Unknown`).
#[derive(Debug)]
pub enum JsonOutcome {
    /// 2xx response with a parsed JSON body.
    Body(Value),
    /// HTTP 404.
    NotFound,
    /// HTTP 401 or 403.
    Unauthorized(u16),
    /// Any other non-success HTTP status.
    Status(u16),
    /// 2xx response whose body was not valid JSON.
    Malformed(String),
    /// Timeout, DNS failure, connection refused.
    Transport(String),
}

/// Configuration for the shared HTTP client.
///
/// Timeouts are a per-request concern (each adapter carries its own), so
/// this only covers connection pooling.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Maximum idle connections per host (default: 10)
    pub max_idle_per_host: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 10,
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum idle connections per host.
    ///
    /// # Examples
    ///
    /// ```
    /// use libimago::client::ClientConfig;
    ///
    /// let config = ClientConfig::new().with_max_idle_per_host(20);
    /// assert_eq!(config.max_idle_per_host, 20);
    /// ```
    pub fn with_max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }
}

/// HTTP client shared by all registry adapters.
#[derive(Debug, Clone)]
pub struct Client {
    http: ReqwestClient,
}

impl Client {
    /// Creates a new client with default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use libimago::Client;
    ///
    /// let client = Client::new().unwrap();
    /// # let _ = client;
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a new client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        // GitHub's API rejects requests without a User-Agent.
        let http = ReqwestClient::builder()
            .user_agent(concat!("imago/", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(config.max_idle_per_host)
            .build()
            .map_err(|e| ImagoError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self { http })
    }

    /// Performs a GET for a JSON document and classifies the outcome.
    ///
    /// The `bearer` token, when present, is sent as an `Authorization`
    /// header. The timeout applies to the whole request; a request that
    /// exceeds it is a transport failure, not an HTTP error.
    pub async fn get_json(
        &self,
        url: &str,
        accept: Option<&str>,
        bearer: Option<&str>,
        timeout: Duration,
    ) -> JsonOutcome {
        let mut request = self.http.get(url).timeout(timeout);
        if let Some(accept) = accept {
            request = request.header(ACCEPT, accept);
        }
        if let Some(token) = bearer {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return JsonOutcome::Transport(Self::describe_transport_error(&e, url)),
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return JsonOutcome::NotFound;
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return JsonOutcome::Unauthorized(status.as_u16());
        }
        if !status.is_success() {
            return JsonOutcome::Status(status.as_u16());
        }

        match response.json::<Value>().await {
            Ok(body) => JsonOutcome::Body(body),
            Err(e) => JsonOutcome::Malformed(e.to_string()),
        }
    }

    /// Renders a reqwest error into a transport failure message.
    fn describe_transport_error(error: &reqwest::Error, url: &str) -> String {
        if error.is_timeout() {
            format!("request to {} timed out", url)
        } else if error.is_connect() {
            format!("failed to connect to {}: {}", url, error)
        } else {
            format!("network error communicating with {}: {}", url, error)
        }
    }
}
