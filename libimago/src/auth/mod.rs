//! Credential handling for registry lookups.
//!
//! GHCR and Codeberg accept bearer tokens; Docker Hub tag metadata is
//! public. Tokens are process-scoped configuration: they are read once at
//! startup, passed into the resolver, and never written to disk. The
//! `Debug` impl redacts token values so they cannot leak into logs.

use std::fmt;

#[cfg(test)]
mod tests;

/// Optional bearer tokens for the registries that accept them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    github_token: Option<String>,
    codeberg_token: Option<String>,
}

impl Credentials {
    /// Creates an empty credential set (all lookups anonymous).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GitHub personal access token used for ghcr.io lookups.
    ///
    /// # Examples
    ///
    /// ```
    /// use libimago::Credentials;
    ///
    /// let creds = Credentials::new().with_github_token("ghp_example");
    /// assert_eq!(creds.github_token(), Some("ghp_example"));
    /// ```
    pub fn with_github_token(mut self, token: impl Into<String>) -> Self {
        self.github_token = Some(token.into());
        self
    }

    /// Sets the Codeberg API token used for codeberg.org lookups.
    pub fn with_codeberg_token(mut self, token: impl Into<String>) -> Self {
        self.codeberg_token = Some(token.into());
        self
    }

    /// Returns the GitHub token, if one was supplied.
    pub fn github_token(&self) -> Option<&str> {
        self.github_token.as_deref()
    }

    /// Returns the Codeberg token, if one was supplied.
    pub fn codeberg_token(&self) -> Option<&str> {
        self.codeberg_token.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("github_token", &self.github_token.as_ref().map(|_| "<redacted>"))
            .field(
                "codeberg_token",
                &self.codeberg_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
