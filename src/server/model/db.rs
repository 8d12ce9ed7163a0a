//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate.

/// Registered user account.
///
/// # Fields (from `entity::holocron_user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `email` - Login email, unique across users
/// - `password_hash` - Argon2id PHC string, never the plaintext password
/// - `created_at` - Timestamp when the account was registered
pub type UserModel = entity::holocron_user::Model;

/// Catalogued character, unique by name, gender, hair color & eye color.
pub type CharacterModel = entity::character::Model;

/// Catalogued planet, unique by name, diameter, population & terrain.
pub type PlanetModel = entity::planet::Model;

/// A user's favorite character or planet.
///
/// # Fields (from `entity::favorite::Model`)
/// - `user_id` - Foreign key to the owning user
/// - `kind` - What the favorite refers to, e.g. `"personaje"` or `"planeta"`
/// - `favorite_id` - ID of the referenced record
pub type FavoriteModel = entity::favorite::Model;
