//! Reference discovery in configuration files.
//!
//! Walks a directory of JSON configuration files and extracts every image
//! reference they declare. Image strings live in `image` fields, optionally
//! paired with a sibling `tag` field, at any depth of dict/list nesting.
//! Per-file read or parse failures are warned about and skipped; only a
//! missing directory is an error. Output order is deterministic so reports
//! are reproducible.

use crate::error::{ImagoError, Result};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;


/// One image reference declared in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// Label of the declaring file (its top-level key, or the file stem).
    pub source: String,
    /// Raw image string as found in the file.
    pub image: String,
    /// Sibling `tag` field, when present. An empty string is kept distinct
    /// from an absent field here; the parser treats both as `latest`.
    pub tag: Option<String>,
}

impl ImageEntry {
    /// Creates an entry, e.g. for a single ad-hoc check.
    pub fn new(source: impl Into<String>, image: impl Into<String>, tag: Option<String>) -> Self {
        Self {
            source: source.into(),
            image: image.into(),
            tag,
        }
    }

    /// Display form `image:tag`, defaulting the tag to `latest`.
    ///
    /// An image string that already carries a tag is returned as-is.
    pub fn image_tag(&self) -> String {
        if self.image.contains(':') {
            return self.image.clone();
        }
        let tag = self
            .tag
            .as_deref()
            .filter(|tag| !tag.is_empty())
            .unwrap_or("latest");
        format!("{}:{}", self.image, tag)
    }
}

/// Scans `directory` for JSON files and extracts their image references.
///
/// Files named `exclude` and non-JSON files are skipped. Results are sorted
/// by `image:tag` string, then source label.
///
/// # Errors
///
/// Returns a configuration error when `directory` does not exist or is not
/// a directory. Unreadable or malformed files inside it are skipped with a
/// warning instead.
pub fn discover(directory: &Path, exclude: &str) -> Result<Vec<ImageEntry>> {
    if !directory.is_dir() {
        return Err(ImagoError::config(
            format!("directory '{}' not found", directory.display()),
            Some(directory.display().to_string()),
        ));
    }

    let mut entries = Vec::new();

    for dirent in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let dirent = match dirent {
            Ok(dirent) => dirent,
            Err(e) => {
                warn!("skipping unreadable directory entry: {}", e);
                continue;
            }
        };
        if !dirent.file_type().is_file() {
            continue;
        }
        let path = dirent.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name == exclude || !name.ends_with(".json") {
            continue;
        }

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("could not read '{}': {}", name, e);
                continue;
            }
        };
        let value: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                warn!("could not parse '{}': {}", name, e);
                continue;
            }
        };

        let source = top_level_key(&value).unwrap_or_else(|| file_stem(path));
        collect_images(&value, &source, &mut entries);
    }

    entries.sort_by(|a, b| {
        a.image_tag()
            .cmp(&b.image_tag())
            .then_with(|| a.source.cmp(&b.source))
    });
    Ok(entries)
}

/// Returns the distinct `image:tag` strings of `entries`, sorted.
pub fn unique_image_tags(entries: &[ImageEntry]) -> Vec<String> {
    entries
        .iter()
        .map(ImageEntry::image_tag)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The file identifier is the configuration's top-level key.
fn top_level_key(value: &Value) -> Option<String> {
    value.as_object().and_then(|map| map.keys().next()).cloned()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// Recursively collects `image` fields (with sibling `tag`) from any
/// dict/list nesting.
fn collect_images(value: &Value, source: &str, out: &mut Vec<ImageEntry>) {
    match value {
        Value::Object(map) => {
            if let Some(image) = map.get("image").and_then(Value::as_str) {
                let tag = map.get("tag").and_then(Value::as_str).map(str::to_string);
                out.push(ImageEntry::new(source, image, tag));
            }
            for nested in map.values() {
                collect_images(nested, source, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_images(item, source, out);
            }
        }
        _ => {}
    }
}
