//! Error Types

use thiserror::Error;

/// Errors raised while reading or writing persisted state.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing store cannot be reached (e.g. storage disabled by the browser).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The store rejected a write (quota exceeded, security error).
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },

    /// The stored value exists but is not the JSON we expect.
    #[error("stored value under `{key}` is not valid: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The value could not be serialized.
    #[error("failed to encode value for `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while loading the site configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("site config defines no banners")]
    NoBanners,

    #[error("counter steps must be greater than zero")]
    ZeroCounterSteps,

    #[error("unknown log level `{0}`")]
    LogLevel(String),
}
