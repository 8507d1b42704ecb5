//! @acp:module "Errors"
//! @acp:summary "Error types for CloudWatch operations"
//! @acp:domain error
//! @acp:layer model

use thiserror::Error;

/// Boxed error coming from the log-management API client
pub type ApiSource = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum CloudWatchError {
    /// Any failure returned by the remote API: auth, throttling, not-found, network.
    #[error("{operation} failed: {source}")]
    Api {
        operation: &'static str,
        #[source]
        source: ApiSource,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Creation time out of range: {0} ms")]
    InvalidTimestamp(i64),

    #[error("Malformed API response: {0}")]
    MalformedResponse(String),
}

impl CloudWatchError {
    /// Wrap an API client error for the named operation
    pub fn api<E>(operation: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Api {
            operation,
            source: Box::new(source),
        }
    }

    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

pub type Result<T> = std::result::Result<T, CloudWatchError>;
