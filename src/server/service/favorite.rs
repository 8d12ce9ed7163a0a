//! Favorite lookups.

use sea_orm::DatabaseConnection;

use crate::server::{data::favorite::FavoriteRepository, error::Error, model::db::FavoriteModel};

/// Service for looking up user favorites
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks up a user's favorite by kind & referenced record ID
    pub async fn find(
        &self,
        user_id: i32,
        kind: &str,
        favorite_id: i32,
    ) -> Result<Option<FavoriteModel>, Error> {
        let favorite = FavoriteRepository::new(self.db)
            .find(user_id, kind, favorite_id)
            .await?;

        Ok(favorite)
    }
}
