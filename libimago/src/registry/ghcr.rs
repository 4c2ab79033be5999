//! GitHub Container Registry adapter.

use crate::availability::AvailabilityResult;
use crate::client::{Client, JsonOutcome};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Token-authenticated endpoint, noticeably slower than Hub.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Looks up container package metadata on ghcr.io via the GitHub REST API.
///
/// The packages endpoint is scoped to the owner and package name, not to a
/// tag, so the tag parameter does not affect the query: the result reflects
/// the most recent update to the package as a whole. Lookups work without a
/// token for public packages, but GitHub answers 401/403 for anything that
/// needs the `read:packages` scope.
#[derive(Debug, Clone)]
pub struct Ghcr {
    client: Client,
    base_url: String,
}

impl Ghcr {
    /// Creates an adapter pointed at the live GitHub API.
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

    /// Resolves the availability of an owner's container package.
    pub async fn resolve(
        &self,
        owner: &str,
        repository: &str,
        _tag: &str,
        token: Option<&str>,
    ) -> AvailabilityResult {
        let url = format!(
            "{}/users/{}/packages/container/{}",
            self.base_url, owner, repository
        );
        debug!(%url, "querying GitHub Container Registry");

        match self
            .client
            .get_json(&url, Some("application/vnd.github+json"), token, REQUEST_TIMEOUT)
            .await
        {
            JsonOutcome::Body(body) => match body.get("updated_at").and_then(Value::as_str) {
                Some(timestamp) => AvailabilityResult::available(timestamp),
                None => AvailabilityResult::not_found(),
            },
            JsonOutcome::NotFound => AvailabilityResult::not_found(),
            JsonOutcome::Unauthorized(_) => AvailabilityResult::auth_required(),
            JsonOutcome::Status(_) | JsonOutcome::Malformed(_) => AvailabilityResult::error(),
            JsonOutcome::Transport(message) => {
                warn!(
                    "could not check ghcr.io for '{}/{}': {}",
                    owner, repository, message
                );
                AvailabilityResult::unknown()
            }
        }
    }
}
