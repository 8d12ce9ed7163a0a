pub use super::character::Entity as Character;
pub use super::favorite::Entity as Favorite;
pub use super::holocron_user::Entity as HolocronUser;
pub use super::planet::Entity as Planet;
