//! Session resolution for page gating.

use async_trait::async_trait;
use tower_sessions::Session;

use crate::server::{error::Error, model::session::user::SessionUserId};

/// Proof that the current request belongs to a signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentSession {
    /// Id of the signed-in user.
    pub user_id: String,
}

/// Resolves the session for the request being handled.
///
/// Pages receive a resolver instead of reading session state themselves. A resolution error
/// belongs to the session backend and is propagated as-is; absence is `Ok(None)`.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    /// Returns the current session, or `None` when the request is anonymous.
    async fn resolve(&self) -> Result<Option<CurrentSession>, Error>;
}

#[async_trait]
impl SessionResolver for Session {
    async fn resolve(&self) -> Result<Option<CurrentSession>, Error> {
        let session = SessionUserId::get(self)
            .await?
            .map(|user_id| CurrentSession { user_id });

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use taxdesk_test_utils::prelude::*;

    use crate::server::model::session::{
        current::{CurrentSession, SessionResolver},
        user::{SessionUserId, SESSION_USER_ID_KEY},
    };

    /// Expect Some(CurrentSession) when the session holds a user ID
    #[tokio::test]
    async fn resolves_signed_in_session() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        SessionUserId::insert(&test.session, "u1").await.unwrap();

        let result = test.session.resolve().await;

        assert!(matches!(
            result,
            Ok(Some(CurrentSession { ref user_id })) if user_id == "u1"
        ));

        Ok(())
    }

    /// Expect None for a session without a user ID
    #[tokio::test]
    async fn resolves_none_for_anonymous_session() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = test.session.resolve().await;

        assert!(matches!(result, Ok(None)));

        Ok(())
    }

    /// Expect Error when the session value cannot be read
    #[tokio::test]
    async fn propagates_session_read_failure() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        test.session.insert(SESSION_USER_ID_KEY, 42).await?;

        let result = test.session.resolve().await;

        assert!(result.is_err());

        Ok(())
    }
}
