//! Error types for Imago
//!
//! This module provides error handling for Imago operations. Registry lookup
//! failures are deliberately *not* errors: they are captured in
//! [`crate::availability::AvailabilityResult`] so that one unreachable
//! registry cannot abort a whole run. `ImagoError` covers everything else:
//! HTTP client construction, settings loading, and discovery I/O.

use thiserror::Error;

#[cfg(test)]
mod tests;

/// Main error type for Imago operations
#[derive(Error, Debug)]
pub enum ImagoError {
    /// Network-related errors (client construction, TLS setup)
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors (malformed configuration data)
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors (missing scan directory, invalid settings file)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for Imago operations
pub type Result<T> = std::result::Result<T, ImagoError>;

impl ImagoError {
    /// Creates a new network error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libimago::error::ImagoError;
    ///
    /// let err = ImagoError::network("connection refused");
    /// assert!(matches!(err, ImagoError::Network { .. }));
    /// ```
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new network error with a source error.
    pub fn network_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libimago::error::ImagoError;
    ///
    /// let err = ImagoError::validation("unexpected configuration shape");
    /// assert!(matches!(err, ImagoError::Validation { .. }));
    /// ```
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new validation error with a source error.
    pub fn validation_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Validation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libimago::error::ImagoError;
    ///
    /// let err = ImagoError::config("directory not found", Some("./configs"));
    /// assert!(matches!(err, ImagoError::Config { .. }));
    /// ```
    pub fn config<S: Into<String>>(message: S, path: Option<S>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Creates a new configuration error with a source error.
    pub fn config_with_source<S, E>(message: S, path: Option<S>, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }
}
