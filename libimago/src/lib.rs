//! Imago - Container Image Availability Auditor Library
//!
//! Imago resolves container image references found in configuration files
//! and checks, for each one, whether the referenced image tag still exists
//! in its origin registry and when it was last published.
//!
//! # Quick Start
//!
//! ```no_run
//! use libimago::{CheckOptions, Client, Credentials, ImageEntry, Resolver, check_all};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new()?;
//!     let resolver = Resolver::new(client, Credentials::new());
//!
//!     let entries = vec![ImageEntry::new("adhoc", "ubuntu:20.04", None)];
//!     let rows = check_all(&resolver, &entries, &CheckOptions::default()).await;
//!     for row in rows {
//!         println!("{}: {}", row.image_tag(), row.result.availability);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Main Types
//!
//! - [`Reference`] - Canonical image reference parsing
//! - [`Resolver`] - Routes references to the right registry adapter
//! - [`AvailabilityResult`] - What a registry answered for one lookup
//! - [`Credentials`] - Optional bearer tokens for GHCR and Codeberg
//! - [`ImageEntry`] - An image reference discovered in a configuration file
//!
//! # Architecture
//!
//! Raw image strings flow from [`discovery`] through [`reference`] parsing
//! into the [`registry`] dispatcher, whose adapters answer with
//! [`availability`] values; [`check`] schedules the lookups concurrently.
//! A failing registry never aborts a run: every failure is captured in the
//! per-reference result.

#![warn(clippy::all)]

/// Returns the libimago crate version.
///
/// This is useful for version reporting in CLI tools and debugging.
///
/// # Examples
///
/// ```
/// let version = libimago::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// Re-export commonly used types for convenience
pub use auth::Credentials;
pub use availability::{Availability, AvailabilityResult};
pub use check::{CheckOptions, CheckedImage, check_all};
pub use client::Client;
pub use config::Settings;
pub use discovery::{ImageEntry, discover, unique_image_tags};
pub use error::{ImagoError, Result};
pub use reference::Reference;
pub use registry::{RegistryKind, Resolver};

pub mod auth;
pub mod availability;
pub mod check;
pub mod client;
pub mod config;
pub mod discovery;
pub mod error;
pub mod reference;
pub mod registry;
