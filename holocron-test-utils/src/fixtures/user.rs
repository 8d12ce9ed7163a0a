use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with the provided email & stored password hash.
    pub async fn insert_user(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<entity::holocron_user::Model, TestError> {
        Ok(
            entity::prelude::HolocronUser::insert(entity::holocron_user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                password_hash: ActiveValue::Set(password_hash.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
