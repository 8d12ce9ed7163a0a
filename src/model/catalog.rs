use serde::{Deserialize, Serialize};

/// Character attributes submitted to `/personajes`
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
}

/// Planet attributes submitted to `/planetas`
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub name: Option<String>,
    pub diameter: Option<i64>,
    pub population: Option<i64>,
    pub terrain: Option<String>,
}

/// Favorite lookup submitted to `/favoritos`
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteQueryDto {
    #[serde(rename = "User_id")]
    pub user_id: Option<i32>,
    #[serde(rename = "tipoFavorito")]
    pub kind: Option<String>,
    #[serde(rename = "favoritoId")]
    pub favorite_id: Option<i32>,
}
