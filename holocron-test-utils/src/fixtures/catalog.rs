use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_character(
        &self,
        name: &str,
        gender: &str,
        hair_color: &str,
        eye_color: &str,
    ) -> Result<entity::character::Model, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                gender: ActiveValue::Set(gender.to_string()),
                hair_color: ActiveValue::Set(hair_color.to_string()),
                eye_color: ActiveValue::Set(eye_color.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_planet(
        &self,
        name: &str,
        diameter: i64,
        population: i64,
        terrain: &str,
    ) -> Result<entity::planet::Model, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                diameter: ActiveValue::Set(diameter),
                population: ActiveValue::Set(population),
                terrain: ActiveValue::Set(terrain.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
