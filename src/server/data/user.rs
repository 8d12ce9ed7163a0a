//! User repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::db::UserModel;

/// Repository for registered users
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user with an already hashed password
    pub async fn create(&self, email: &str, password_hash: &str) -> Result<UserModel, DbErr> {
        let user = entity::holocron_user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Finds a user by email, returning `None` when no user has registered it
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::HolocronUser::find()
            .filter(entity::holocron_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}
