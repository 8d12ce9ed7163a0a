//! Planet repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::{catalog::PlanetAttributes, db::PlanetModel};

/// Repository for planets
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a planet, failing on the schema's unique index when an identical one exists
    pub async fn create(&self, attributes: &PlanetAttributes) -> Result<PlanetModel, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(attributes.name.clone()),
            diameter: ActiveValue::Set(attributes.diameter),
            population: ActiveValue::Set(attributes.population),
            terrain: ActiveValue::Set(attributes.terrain.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    /// Finds a planet matching every attribute exactly
    pub async fn find_by_attributes(
        &self,
        attributes: &PlanetAttributes,
    ) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .filter(entity::planet::Column::Name.eq(attributes.name.as_str()))
            .filter(entity::planet::Column::Diameter.eq(attributes.diameter))
            .filter(entity::planet::Column::Population.eq(attributes.population))
            .filter(entity::planet::Column::Terrain.eq(attributes.terrain.as_str()))
            .one(self.db)
            .await
    }

    /// Number of stored planets
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Planet::find().count(self.db).await
    }
}
