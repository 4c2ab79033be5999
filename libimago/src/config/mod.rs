//! Application settings.
//!
//! This module manages settings with sensible defaults, loading from an
//! optional YAML file. Credentials are deliberately *not* part of the
//! settings file; they come from flags or the environment and are never
//! written to disk.

use crate::error::{ImagoError, Result};
use config::{Config as ConfigRs, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;


/// Root settings structure.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Settings {
    #[serde(default)]
    pub scan: Scan,
    #[serde(default)]
    pub network: Network,
}

impl Settings {
    /// Parses `Settings` from a YAML string.
    ///
    /// This function is primarily used for testing.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let builder = ConfigRs::builder()
            .add_source(Self::defaults_source()?)
            .add_source(File::from_str(s, FileFormat::Yaml));

        Self::from_builder(builder)
    }

    /// Loads `Settings` from an optional file path.
    ///
    /// With `None`, or when nothing exists at the path, the defaults are
    /// returned.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigRs::builder().add_source(Self::defaults_source()?);

        if let Some(p) = path
            && p.exists()
        {
            builder = builder.add_source(File::from(p).required(true));
        }

        Self::from_builder(builder)
    }

    fn defaults_source() -> Result<ConfigRs> {
        ConfigRs::try_from(&Settings::default()).map_err(|e| {
            ImagoError::config_with_source("Failed to build default settings", None::<String>, e)
        })
    }

    fn from_builder(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| {
                ImagoError::config_with_source(
                    "Failed to deserialize settings",
                    None::<String>,
                    e,
                )
            })
    }
}

/// Configuration-file scanning settings.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scan {
    /// Directory searched for JSON configuration files.
    #[serde(default = "default_scan_directory")]
    pub directory: String,

    /// File name excluded from the scan.
    #[serde(default = "default_scan_exclude")]
    pub exclude: String,
}

impl Default for Scan {
    fn default() -> Self {
        Self {
            directory: default_scan_directory(),
            exclude: default_scan_exclude(),
        }
    }
}

fn default_scan_directory() -> String {
    "./configs".to_string()
}

fn default_scan_exclude() -> String {
    "root.json".to_string()
}

/// Network scheduling settings.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Network {
    /// Maximum number of concurrent registry lookups.
    #[serde(default = "default_network_concurrency")]
    pub concurrency: usize,

    /// Optional global deadline for a whole run, in seconds.
    #[serde(default)]
    pub deadline: Option<u64>,
}

impl Default for Network {
    fn default() -> Self {
        Self {
            concurrency: default_network_concurrency(),
            deadline: None,
        }
    }
}

fn default_network_concurrency() -> usize {
    8
}
