use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
    pub session: Session,
    pub store: MemoryStore,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let store = MemoryStore::default();
        let session = Session::new(None, Arc::new(store.clone()), None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            state: TestAppState { db },
            session,
            store,
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Persist a new session holding `value` under `key` in the shared store.
    ///
    /// Returns the session id to send as the `id` cookie, letting HTTP-level
    /// tests act as a signed-in browser.
    pub async fn persisted_session<T>(&self, key: &str, value: T) -> Result<String, TestError>
    where
        T: serde::Serialize + Send + Sync,
    {
        let session = Session::new(None, Arc::new(self.store.clone()), None);
        session.insert(key, value).await?;
        session.save().await?;

        let id = session.id().map(|id| id.to_string()).unwrap_or_default();

        Ok(id)
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_user_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![schema.create_table_from_entity(entity::prelude::TaxdeskUser)];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
