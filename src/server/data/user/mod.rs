//! Data access for `taxdesk_user` records.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::UserModel;

/// Queries against the `taxdesk_user` table.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the user with the provided primary key
    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::TaxdeskUser::find_by_id(user_id.to_string())
            .one(self.db)
            .await
    }

    /// Finds the user with the provided email
    ///
    /// Email is unique so at most one record matches.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::TaxdeskUser::find()
            .filter(entity::taxdesk_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}
