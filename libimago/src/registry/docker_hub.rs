//! Docker Hub adapter.

use crate::availability::AvailabilityResult;
use crate::client::{Client, JsonOutcome};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://hub.docker.com";

/// Hub answers quickly; a slow lookup must not stall the whole run.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Looks up tag metadata on Docker Hub.
///
/// Hub's tag endpoint is public, so no credential is involved. The tag is
/// part of the URL: a 200 response carrying `last_updated` confirms that
/// the exact `owner/repo:tag` triple exists.
#[derive(Debug, Clone)]
pub struct DockerHub {
    client: Client,
    base_url: String,
}

impl DockerHub {
    /// Creates an adapter pointed at the live Docker Hub API.
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL)
    }

    /// Creates an adapter with a custom base URL (used by tests).
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolves the availability of `owner/repository:tag` on Docker Hub.
    pub async fn resolve(&self, owner: &str, repository: &str, tag: &str) -> AvailabilityResult {
        // Registry names are case-insensitive.
        let url = format!(
            "{}/v2/repositories/{}/{}/tags/{}",
            self.base_url,
            owner.to_lowercase(),
            repository.to_lowercase(),
            tag
        );
        debug!(%url, "querying Docker Hub");

        match self.client.get_json(&url, None, None, REQUEST_TIMEOUT).await {
            JsonOutcome::Body(body) => match body.get("last_updated").and_then(Value::as_str) {
                Some(timestamp) => AvailabilityResult::available(timestamp),
                None => AvailabilityResult::not_found(),
            },
            JsonOutcome::NotFound => AvailabilityResult::not_found(),
            JsonOutcome::Unauthorized(_) | JsonOutcome::Status(_) | JsonOutcome::Malformed(_) => {
                AvailabilityResult::error()
            }
            JsonOutcome::Transport(message) => {
                warn!(
                    "could not check Docker Hub for '{}/{}': {}",
                    owner, repository, message
                );
                AvailabilityResult::unknown()
            }
        }
    }
}
