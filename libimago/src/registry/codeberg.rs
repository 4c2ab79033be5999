//! Codeberg adapter (Gitea-style package API).

use crate::availability::AvailabilityResult;
use crate::client::{Client, JsonOutcome};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://codeberg.org";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Gitea serves package metadata under several manifest media types.
const ACCEPT: &str = "application/vnd.oci.image.index.v1+json, \
    application/vnd.docker.distribution.manifest.v2+json, \
    application/vnd.docker.distribution.manifest.list.v2+json, \
    application/json";

/// Looks up container package metadata on codeberg.org.
///
/// Unlike GHCR, the tag is part of the URL, so the answer is specific to
/// the requested version. The live API does not currently require
/// authentication; the token is forwarded when supplied in case that
/// changes.
#[derive(Debug, Clone)]
pub struct Codeberg {
    client: Client,
    base_url: String,
}

impl Codeberg {
    /// Creates an adapter pointed at the live Codeberg API.
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

    /// Resolves the availability of `owner/repository:tag` on Codeberg.
    pub async fn resolve(
        &self,
        owner: &str,
        repository: &str,
        tag: &str,
        token: Option<&str>,
    ) -> AvailabilityResult {
        let url = format!(
            "{}/api/v1/packages/{}/container/{}/{}",
            self.base_url, owner, repository, tag
        );
        debug!(%url, "querying Codeberg");

        match self
            .client
            .get_json(&url, Some(ACCEPT), token, REQUEST_TIMEOUT)
            .await
        {
            JsonOutcome::Body(body) => match body.get("created_at").and_then(Value::as_str) {
                Some(timestamp) => AvailabilityResult::available(timestamp),
                None => AvailabilityResult::not_found(),
            },
            JsonOutcome::NotFound => AvailabilityResult::not_found(),
            JsonOutcome::Unauthorized(_) => AvailabilityResult::auth_required(),
            JsonOutcome::Status(_) | JsonOutcome::Malformed(_) => AvailabilityResult::error(),
            JsonOutcome::Transport(message) => {
                warn!(
                    "could not check codeberg.org for '{}/{}': {}",
                    owner, repository, message
                );
                AvailabilityResult::unknown()
            }
        }
    }
}
