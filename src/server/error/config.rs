//! Errors raised while reading the portal's environment configuration.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// The portal cannot start with the environment it was given.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is unset.
    #[error("Taxdesk requires the {0} environment variable to be set")]
    MissingEnvVar(String),
    /// A variable is set but cannot be used.
    #[error("{var} is set to {value:?}, which is not usable: {reason}")]
    InvalidEnvValue {
        /// Name of the offending variable.
        var: String,
        /// Value as read from the environment.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(var: &str, value: &str, reason: impl ToString) -> Self {
        Self::InvalidEnvValue {
            var: var.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
