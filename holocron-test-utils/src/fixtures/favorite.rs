use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD_HASH, error::TestError, TestContext};

impl TestContext {
    pub fn favorite<'a>(&'a self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    /// Insert a favorite for an existing user.
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        kind: &str,
        favorite_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                kind: ActiveValue::Set(kind.to_string()),
                favorite_id: ActiveValue::Set(favorite_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a new user along with a favorite owned by them.
    pub async fn insert_favorite_with_user(
        &self,
        email: &str,
        kind: &str,
        favorite_id: i32,
    ) -> Result<(entity::holocron_user::Model, entity::favorite::Model), TestError> {
        let user_model = self
            .setup
            .user()
            .insert_user(email, TEST_PASSWORD_HASH)
            .await?;

        let favorite_model = self.insert_favorite(user_model.id, kind, favorite_id).await?;

        Ok((user_model, favorite_model))
    }
}
