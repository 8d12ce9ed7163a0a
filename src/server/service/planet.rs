//! Planet creation.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::planet::PlanetRepository,
    error::{request::RequestError, Error},
    model::{catalog::PlanetAttributes, db::PlanetModel},
    util::db::conflict_on_unique_violation,
};

static PLANET_RESOURCE: &str = "planetas";

/// Service for creating planets without duplicates
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a planet unless one with identical attributes is already stored.
    ///
    /// # Returns
    /// - `Ok(PlanetModel)`: Planet created
    /// - `Err(Error::RequestError(RequestError::AlreadyExists))`: Identical planet exists
    /// - `Err(Error::DbErr)`: Database failure
    pub async fn create(&self, attributes: PlanetAttributes) -> Result<PlanetModel, Error> {
        let planet_repository = PlanetRepository::new(self.db);

        if planet_repository
            .find_by_attributes(&attributes)
            .await?
            .is_some()
        {
            return Err(RequestError::AlreadyExists(PLANET_RESOURCE).into());
        }

        let planet = planet_repository
            .create(&attributes)
            .await
            .map_err(|err| conflict_on_unique_violation(err, PLANET_RESOURCE))?;

        tracing::debug!(planet_id = %planet.id, name = %planet.name, "Created planet");

        Ok(planet)
    }
}
