//! Character repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::{catalog::CharacterAttributes, db::CharacterModel};

/// Repository for characters
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a character, failing on the schema's unique index when an identical one exists
    pub async fn create(&self, attributes: &CharacterAttributes) -> Result<CharacterModel, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(attributes.name.clone()),
            gender: ActiveValue::Set(attributes.gender.clone()),
            hair_color: ActiveValue::Set(attributes.hair_color.clone()),
            eye_color: ActiveValue::Set(attributes.eye_color.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    /// Finds a character matching every attribute exactly
    pub async fn find_by_attributes(
        &self,
        attributes: &CharacterAttributes,
    ) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::Name.eq(attributes.name.as_str()))
            .filter(entity::character::Column::Gender.eq(attributes.gender.as_str()))
            .filter(entity::character::Column::HairColor.eq(attributes.hair_color.as_str()))
            .filter(entity::character::Column::EyeColor.eq(attributes.eye_color.as_str()))
            .one(self.db)
            .await
    }

    /// Number of stored characters
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Character::find().count(self.db).await
    }
}
