//! Concurrent availability checking.
//!
//! Each lookup is an independent read-only request, so all pending lookups
//! are dispatched concurrently on a bounded pool; a slow or unreachable
//! registry must not delay the others. An optional global deadline aborts
//! whatever is still in flight and reports it as `Unknown` rather than
//! blocking. Every input entry yields exactly one row in the output.

use crate::availability::AvailabilityResult;
use crate::discovery::ImageEntry;
use crate::reference::Reference;
use crate::registry::Resolver;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::warn;


/// Scheduling limits for a check run.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Maximum number of lookups in flight at once (default: 8)
    pub concurrency: usize,
    /// Global deadline for the whole run; in-flight lookups past it are
    /// reported as `Unknown`. `None` means each lookup is bounded only by
    /// its own request timeout.
    pub deadline: Option<Duration>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            concurrency: 8,
            deadline: None,
        }
    }
}

impl CheckOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of concurrent lookups.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Sets the global deadline for the run.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// One audited image: where it was declared, what it resolved to, and what
/// its registry said.
#[derive(Debug, Clone, Serialize)]
pub struct CheckedImage {
    /// Label of the declaring configuration file.
    pub source: String,
    /// Raw image string as found in the configuration.
    pub image: String,
    /// Canonical form the lookup was made for.
    pub reference: Reference,
    /// What the registry answered.
    pub result: AvailabilityResult,
}

impl CheckedImage {
    /// Display form `image:tag` of the audited reference.
    pub fn image_tag(&self) -> String {
        if self.image.contains(':') {
            return self.image.clone();
        }
        format!("{}:{}", self.image, self.reference.tag())
    }
}

/// Resolves the availability of every entry, concurrently.
///
/// The returned rows are sorted by publish date, then source label, then
/// `image:tag` (`N/A` dates sort last). No entry is ever dropped: lookups
/// that fail, are aborted by the deadline, or panic are reported as
/// `Unknown`.
pub async fn check_all(
    resolver: &Resolver,
    entries: &[ImageEntry],
    options: &CheckOptions,
) -> Vec<CheckedImage> {
    let semaphore = Arc::new(Semaphore::new(options.concurrency.max(1)));
    let mut tasks = JoinSet::new();

    for (index, entry) in entries.iter().enumerate() {
        let resolver = resolver.clone();
        let semaphore = Arc::clone(&semaphore);
        let image = entry.image.clone();
        let tag = entry.tag.clone();
        tasks.spawn(async move {
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => return (index, AvailabilityResult::unknown()),
            };
            let reference = Reference::parse(&image, tag.as_deref());
            (index, resolver.resolve(&reference).await)
        });
    }

    let mut results: Vec<Option<AvailabilityResult>> = vec![None; entries.len()];
    let collect = async {
        while let Some(joined) = tasks.join_next().await {
            if let Ok((index, result)) = joined {
                results[index] = Some(result);
            }
        }
    };
    match options.deadline {
        Some(deadline) => {
            if tokio::time::timeout(deadline, collect).await.is_err() {
                warn!(
                    "deadline of {:?} reached; reporting remaining lookups as Unknown",
                    deadline
                );
                tasks.abort_all();
            }
        }
        None => collect.await,
    }

    let mut rows: Vec<CheckedImage> = entries
        .iter()
        .zip(results)
        .map(|(entry, result)| CheckedImage {
            source: entry.source.clone(),
            image: entry.image.clone(),
            reference: Reference::parse(&entry.image, entry.tag.as_deref()),
            result: result.unwrap_or_else(AvailabilityResult::unknown),
        })
        .collect();

    rows.sort_by_key(|row| {
        (
            row.result.last_published_date(),
            row.source.clone(),
            row.image_tag(),
        )
    });
    rows
}
