//! Registry adapters and dispatch.
//!
//! Three adapters cover the supported registries; [`Resolver`] selects the
//! right one for a canonical reference and injects credentials. Routing is
//! a prefix match on the registry host, with Docker Hub as the default for
//! any unrecognized host. Adding a registry means adding one
//! [`RegistryKind`] variant and one routing arm, not touching call sites.

use crate::auth::Credentials;
use crate::availability::AvailabilityResult;
use crate::client::Client;
use crate::reference::Reference;
use tracing::warn;

mod codeberg;
mod docker_hub;
mod ghcr;

pub use codeberg::Codeberg;
pub use docker_hub::DockerHub;
pub use ghcr::Ghcr;

#[cfg(test)]
mod tests;

/// The closed set of supported registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryKind {
    DockerHub,
    Ghcr,
    Codeberg,
}

impl RegistryKind {
    /// Selects the adapter kind for a registry host.
    ///
    /// Unrecognized hosts are assumed to be Docker-Hub-compatible, matching
    /// the real-world prevalence of unscoped Hub references.
    ///
    /// # Examples
    ///
    /// ```
    /// use libimago::RegistryKind;
    ///
    /// assert_eq!(RegistryKind::for_registry("ghcr.io"), RegistryKind::Ghcr);
    /// assert_eq!(RegistryKind::for_registry("docker.io"), RegistryKind::DockerHub);
    /// ```
    pub fn for_registry(registry: &str) -> Self {
        if registry.starts_with("ghcr.io") {
            Self::Ghcr
        } else if registry.starts_with("codeberg.org") {
            Self::Codeberg
        } else {
            Self::DockerHub
        }
    }
}

/// Routes canonical references to the adapter for their registry.
///
/// The resolver does no retries of its own and never fails: every call
/// produces exactly one [`AvailabilityResult`], with failures captured as
/// `Error`/`Unknown`/`AuthRequired` values.
#[derive(Debug, Clone)]
pub struct Resolver {
    docker_hub: DockerHub,
    ghcr: Ghcr,
    codeberg: Codeberg,
    credentials: Credentials,
}

impl Resolver {
    /// Creates a resolver whose adapters point at the live registries.
    ///
    /// The client (and its connection pool) is shared by all three
    /// adapters.
    pub fn new(client: Client, credentials: Credentials) -> Self {
        Self {
            docker_hub: DockerHub::new(client.clone()),
            ghcr: Ghcr::new(client.clone()),
            codeberg: Codeberg::new(client),
            credentials,
        }
    }

    /// Creates a resolver from pre-built adapters (used by tests to point
    /// adapters at mock servers).
    pub fn with_adapters(
        docker_hub: DockerHub,
        ghcr: Ghcr,
        codeberg: Codeberg,
        credentials: Credentials,
    ) -> Self {
        Self {
            docker_hub,
            ghcr,
            codeberg,
            credentials,
        }
    }

    /// Resolves the availability of a canonical reference.
    ///
    /// When a lookup is routed to GHCR or Codeberg without the matching
    /// token, a non-fatal warning is emitted and the unauthenticated call
    /// still proceeds; auth-optional endpoints may answer, and protected
    /// ones surface as `AuthRequired`.
    pub async fn resolve(&self, reference: &Reference) -> AvailabilityResult {
        match RegistryKind::for_registry(reference.registry()) {
            RegistryKind::DockerHub => {
                self.docker_hub
                    .resolve(reference.owner(), reference.repository(), reference.tag())
                    .await
            }
            RegistryKind::Ghcr => {
                if self.credentials.github_token().is_none() {
                    warn!("GitHub token not provided; ghcr.io checks may be inaccurate");
                }
                self.ghcr
                    .resolve(
                        reference.owner(),
                        reference.repository(),
                        reference.tag(),
                        self.credentials.github_token(),
                    )
                    .await
            }
            RegistryKind::Codeberg => {
                if self.credentials.codeberg_token().is_none() {
                    warn!("Codeberg token not provided; attempting an anonymous lookup");
                }
                self.codeberg
                    .resolve(
                        reference.owner(),
                        reference.repository(),
                        reference.tag(),
                        self.credentials.codeberg_token(),
                    )
                    .await
            }
        }
    }
}
