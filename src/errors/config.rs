//! Error types for process configuration.

/// Errors that can occur while loading [`WatchConfig`](crate::WatchConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required setting is absent.
    #[error("Missing configuration: {field}")]
    Missing {
        /// Name of the missing setting
        field: String,
    },

    /// A setting is present but cannot be parsed.
    #[error("Invalid configuration for {field}: {details}")]
    Invalid {
        /// Name of the offending setting
        field: String,
        /// Why it was rejected
        details: String,
    },
}

impl ConfigError {
    /// Create a `Missing` error for a specific field.
    pub fn missing(field: impl Into<String>) -> Self {
        ConfigError::Missing {
            field: field.into(),
        }
    }

    /// Create an `Invalid` error for a specific field.
    pub fn invalid(field: impl Into<String>, details: impl std::fmt::Display) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            details: details.to_string(),
        }
    }
}
