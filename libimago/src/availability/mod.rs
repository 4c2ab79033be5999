//! Availability outcomes for registry lookups.
//!
//! Every adapter call terminates in exactly one [`AvailabilityResult`].
//! "The registry said no" and "the registry could not be asked" are
//! different answers for an operator, so the status is an explicit
//! enumeration rather than a boolean.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt;


/// Status of an image tag in its origin registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    /// The registry confirmed the tag exists.
    Available,
    /// The registry authoritatively said the image or tag does not exist.
    NotFound,
    /// The registry was reachable but answered with an unexpected status
    /// or a malformed body.
    Error,
    /// The registry could not be asked (timeout, DNS, connection refused).
    Unknown,
    /// The registry requires a credential that was not accepted or supplied.
    AuthRequired,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Available => "Available",
            Self::NotFound => "Not Found",
            Self::Error => "Error",
            Self::Unknown => "Unknown",
            Self::AuthRequired => "Auth Required",
        };
        write!(f, "{}", label)
    }
}

/// Result of a single registry lookup.
///
/// Constructed once per lookup and immediately consumed by the reporter;
/// results are never cached between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    pub availability: Availability,
    /// Publish timestamp as reported by the registry (ISO-8601), when known.
    pub last_published: Option<String>,
}

impl AvailabilityResult {
    /// The tag exists and was last published at `timestamp`.
    pub fn available<S: Into<String>>(timestamp: S) -> Self {
        Self {
            availability: Availability::Available,
            last_published: Some(timestamp.into()),
        }
    }

    /// The registry said the image or tag does not exist.
    pub fn not_found() -> Self {
        Self {
            availability: Availability::NotFound,
            last_published: None,
        }
    }

    /// The registry answered, but not in a usable way.
    pub fn error() -> Self {
        Self {
            availability: Availability::Error,
            last_published: None,
        }
    }

    /// The registry could not be reached.
    pub fn unknown() -> Self {
        Self {
            availability: Availability::Unknown,
            last_published: None,
        }
    }

    /// The registry rejected or required a credential.
    pub fn auth_required() -> Self {
        Self {
            availability: Availability::AuthRequired,
            last_published: None,
        }
    }

    /// Whether the tag was confirmed to exist.
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    /// Publish date truncated to `yyyy-mm-dd`, or `N/A` when unknown.
    ///
    /// Registries report full RFC 3339 timestamps; a date is enough for the
    /// report, and `N/A` sorts after any date so unknowns land at the end.
    pub fn last_published_date(&self) -> String {
        match &self.last_published {
            Some(timestamp) => match DateTime::parse_from_rfc3339(timestamp) {
                Ok(parsed) => parsed.format("%Y-%m-%d").to_string(),
                Err(_) => timestamp.chars().take(10).collect(),
            },
            None => "N/A".to_string(),
        }
    }
}
