//! User fixture utilities.
//!
//! Provides methods for inserting user records into the test database and
//! factory functions for building in-memory user models.

pub mod factory;

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestSetup};

impl TestSetup {
    /// Insert a user with the provided id and email.
    ///
    /// Requires the user table, create it with `test_setup_with_user_tables!`.
    pub async fn insert_mock_user(&self, id: &str, email: &str) -> Result<UserModel, TestError> {
        let user = factory::mock_user_model(id, email);

        Ok(
            entity::prelude::TaxdeskUser::insert(entity::taxdesk_user::ActiveModel {
                id: ActiveValue::Set(user.id),
                email: ActiveValue::Set(user.email),
                name: ActiveValue::Set(user.name),
                created_at: ActiveValue::Set(user.created_at),
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }
}
