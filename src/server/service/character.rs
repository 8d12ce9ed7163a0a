//! Character creation.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::character::CharacterRepository,
    error::{request::RequestError, Error},
    model::{catalog::CharacterAttributes, db::CharacterModel},
    util::db::conflict_on_unique_violation,
};

static CHARACTER_RESOURCE: &str = "personajes";

/// Service for creating characters without duplicates
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a character unless one with identical attributes is already stored.
    ///
    /// # Returns
    /// - `Ok(CharacterModel)`: Character created
    /// - `Err(Error::RequestError(RequestError::AlreadyExists))`: Identical character exists
    /// - `Err(Error::DbErr)`: Database failure
    pub async fn create(&self, attributes: CharacterAttributes) -> Result<CharacterModel, Error> {
        let character_repository = CharacterRepository::new(self.db);

        if character_repository
            .find_by_attributes(&attributes)
            .await?
            .is_some()
        {
            return Err(RequestError::AlreadyExists(CHARACTER_RESOURCE).into());
        }

        let character = character_repository
            .create(&attributes)
            .await
            .map_err(|err| conflict_on_unique_violation(err, CHARACTER_RESOURCE))?;

        tracing::debug!(character_id = %character.id, name = %character.name, "Created character");

        Ok(character)
    }
}
