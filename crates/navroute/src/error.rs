//! Error types for route registration and route table building.

use thiserror::Error;

/// Errors raised while registering routes.
///
/// A path that matches nothing is not an error: lookups return `None` for it.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The pattern text could not be compiled into a regular expression.
    #[error("invalid route pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A route table entry names a handler that was never registered.
    #[error("route `{route}` refers to unknown handler `{handler}`")]
    UnknownHandler { route: String, handler: String },
}

impl RouterError {
    /// Returns the offending pattern for [`RouterError::InvalidPattern`]
    pub fn pattern(&self) -> Option<&str> {
        match self {
            RouterError::InvalidPattern { pattern, .. } => Some(pattern),
            RouterError::UnknownHandler { .. } => None,
        }
    }
}
