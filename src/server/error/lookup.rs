//! Errors raised by single-record user lookups.

use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use thiserror::Error;

use crate::server::error::internal_server_error_response;

/// A single-record user lookup failed in the store.
///
/// Distinct from a lookup that found nothing, which is reported as `Ok(None)`.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Lookup by email address failed.
    #[error("Failed to look up user by email")]
    UserByEmail(#[source] DbErr),
    /// Lookup by user id failed.
    #[error("Failed to look up user by id")]
    UserById(#[source] DbErr),
}

impl LookupError {
    /// Name of the lookup operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::UserByEmail(_) => "get_user_by_email",
            Self::UserById(_) => "get_user_by_id",
        }
    }

    /// The underlying store error.
    pub fn db_err(&self) -> &DbErr {
        match self {
            Self::UserByEmail(err) | Self::UserById(err) => err,
        }
    }
}

/// 500 without logging: the failure already went through the service's `LookupLogger`.
impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        internal_server_error_response()
    }
}
