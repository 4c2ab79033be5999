//! Application context that holds resolved configuration
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Settings file values
//! 3. Environment variables
//! 4. CLI flags
//!
//! Once built, the context is passed as read-only throughout the application.

use crate::format::{self, ColorChoice};
use libimago::{Credentials, Settings};
use std::env;
use std::path::{Path, PathBuf};

/// Application context with resolved settings and credentials
#[derive(Debug)]
pub struct AppContext {
    /// Resolved settings
    pub settings: Settings,
    /// Registry credentials (flag values win over environment fallbacks)
    pub credentials: Credentials,
}

impl AppContext {
    /// Build context with precedence: defaults > settings file > env vars > CLI flags
    pub fn build(
        settings_path: Option<&Path>,
        cli_color: ColorChoice,
        github_token: Option<String>,
        codeberg_token: Option<String>,
    ) -> Self {
        // 1-2. Defaults, merged with the settings file when one exists.
        let path = settings_path
            .map(Path::to_path_buf)
            .or_else(default_settings_path);
        let settings = Settings::load(path.as_deref()).unwrap_or_else(|e| {
            format::warning(&format!("ignoring settings file: {}", e));
            Settings::default()
        });

        // 3. Environment variable overrides. The explicit --color flag
        // (anything but the Auto default) wins.
        let mut color = cli_color;
        if color == ColorChoice::Auto
            && let Ok(value) = env::var("IMAGO_COLOR")
        {
            color = ColorChoice::from(value.as_str());
        }
        format::init_color(color);

        // 4. CLI flags. clap already resolved the token flags over their
        // GITHUB_TOKEN / CODEBERG_TOKEN environment fallbacks.
        let mut credentials = Credentials::new();
        if let Some(token) = github_token {
            credentials = credentials.with_github_token(token);
        }
        if let Some(token) = codeberg_token {
            credentials = credentials.with_codeberg_token(token);
        }

        Self {
            settings,
            credentials,
        }
    }
}

fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("imago").join("config.yaml"))
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
