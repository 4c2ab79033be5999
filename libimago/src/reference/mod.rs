//! Image reference parsing.
//!
//! This module turns arbitrary image strings (`ubuntu:20.04`,
//! `ghcr.io/org/app:v2`, `codeberg.org/user/app`) into a canonical
//! `(registry, owner, repository, tag)` form. Parsing is total: any input
//! string produces a best-effort reference rather than an error, because
//! the system's job is advisory reporting, not strict validation.

use serde::Serialize;
use std::fmt;


/// Canonical form of a container image reference.
///
/// A host is only recognized as a registry when the first path segment
/// contains a dot; everything else defaults to Docker Hub, where unscoped
/// images belong to the `library` owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Reference {
    registry: String,
    owner: String,
    repository: String,
    tag: String,
}

impl Reference {
    /// Parses an image string into its canonical reference.
    ///
    /// An explicit tag in the string (`name:tag`, split on the *last* colon)
    /// wins over `tag_from_config`; an empty tag from either source counts
    /// as absent and falls back to `latest`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libimago::Reference;
    ///
    /// let reference = Reference::parse("ubuntu:20.04", None);
    /// assert_eq!(reference.registry(), "docker.io");
    /// assert_eq!(reference.owner(), "library");
    /// assert_eq!(reference.repository(), "ubuntu");
    /// assert_eq!(reference.tag(), "20.04");
    /// ```
    pub fn parse(image: &str, tag_from_config: Option<&str>) -> Self {
        // Registry hosts and repository paths never contain ':' in this
        // domain, so a colon can only introduce the tag.
        let (name, tag) = match image.rsplit_once(':') {
            Some((name, tag)) if !tag.is_empty() => (name, tag.to_string()),
            Some((name, _)) => (name, fallback_tag(tag_from_config)),
            None => (image, fallback_tag(tag_from_config)),
        };

        // A dot in the first path segment marks it as a registry host.
        let (registry, path) = match name.split_once('/') {
            Some((first, rest)) if first.contains('.') => (first.to_string(), rest),
            _ => ("docker.io".to_string(), name),
        };

        // Unscoped Docker Hub official images live under `library`. The
        // remainder after the owner is kept verbatim; some registries nest
        // repository paths.
        let (owner, repository) = match path.split_once('/') {
            Some((owner, repository)) => (owner.to_string(), repository.to_string()),
            None => ("library".to_string(), path.to_string()),
        };

        Self {
            registry,
            owner,
            repository,
            tag,
        }
    }

    /// Returns the registry host (e.g. `docker.io`, `ghcr.io`).
    pub fn registry(&self) -> &str {
        &self.registry
    }

    /// Returns the image owner (e.g. `library`, `linuxserver`).
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the repository path, which may contain further `/` segments.
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Returns the tag, defaulting to `latest` when none was given.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

fn fallback_tag(tag_from_config: Option<&str>) -> String {
    match tag_from_config {
        Some(tag) if !tag.is_empty() => tag.to_string(),
        _ => "latest".to_string(),
    }
}

impl From<&str> for Reference {
    fn from(image: &str) -> Self {
        Self::parse(image, None)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}:{}",
            self.registry, self.owner, self.repository, self.tag
        )
    }
}
