//! Favorite repository.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::FavoriteModel;

/// Repository for user favorites
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the favorite of a user matching kind & referenced record ID
    pub async fn find(
        &self,
        user_id: i32,
        kind: &str,
        favorite_id: i32,
    ) -> Result<Option<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::Kind.eq(kind))
            .filter(entity::favorite::Column::FavoriteId.eq(favorite_id))
            .one(self.db)
            .await
    }
}
