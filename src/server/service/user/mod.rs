//! User service layer.
//!
//! Single-record user lookups by email or id. Each lookup comes in two forms:
//! - `find_user_by_*` returns `Result<Option<_>, Error>`, keeping "not found" (`Ok(None)`) apart
//!   from "lookup failed" (`Err(Error::LookupError(_))`).
//! - `get_user_by_*` collapses both into `None` for callers that only care whether a record was
//!   obtained.
//!
//! Store failures are reported to the service's [`LookupLogger`] exactly once, whichever form is
//! used.

pub mod logger;

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{lookup::LookupError, Error},
    model::db::UserModel,
};

pub use logger::{LookupLogger, TracingLookupLogger};

/// Service for looking up user records.
pub struct UserService<'a, L: LookupLogger = TracingLookupLogger> {
    db: &'a DatabaseConnection,
    logger: L,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService reporting failures through `tracing`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_logger(db, TracingLookupLogger)
    }
}

impl<'a, L: LookupLogger> UserService<'a, L> {
    /// Creates a new instance of UserService reporting failures to `logger`.
    pub fn with_logger(db: &'a DatabaseConnection, logger: L) -> Self {
        Self { db, logger }
    }

    /// Looks up the user whose email equals `email`.
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))` - User found
    /// - `Ok(None)` - No user has this email
    /// - `Err(Error::LookupError(LookupError::UserByEmail))` - Store access failed
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, Error> {
        UserRepository::new(self.db)
            .find_by_email(email)
            .await
            .map_err(|e| self.report(LookupError::UserByEmail(e)))
    }

    /// Looks up the user whose id equals `user_id`.
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))` - User found
    /// - `Ok(None)` - No user has this id
    /// - `Err(Error::LookupError(LookupError::UserById))` - Store access failed
    pub async fn find_user_by_id(&self, user_id: &str) -> Result<Option<UserModel>, Error> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await
            .map_err(|e| self.report(LookupError::UserById(e)))
    }

    /// Returns the user whose email equals `email`, or `None` if there is no such user or the
    /// lookup failed.
    pub async fn get_user_by_email(&self, email: &str) -> Option<UserModel> {
        self.find_user_by_email(email).await.ok().flatten()
    }

    /// Returns the user whose id equals `user_id`, or `None` if there is no such user or the
    /// lookup failed.
    pub async fn get_user_by_id(&self, user_id: &str) -> Option<UserModel> {
        self.find_user_by_id(user_id).await.ok().flatten()
    }

    fn report(&self, error: LookupError) -> Error {
        self.logger.lookup_failed(&error);

        Error::LookupError(error)
    }
}
