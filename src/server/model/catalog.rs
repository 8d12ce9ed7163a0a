//! Attribute tuples identifying catalogue records.
//!
//! Controllers build these from validated DTOs; repositories match on every field.

/// Complete set of attributes identifying a character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterAttributes {
    /// Character name
    pub name: String,
    /// Character gender
    pub gender: String,
    /// Hair color
    pub hair_color: String,
    /// Eye color
    pub eye_color: String,
}

/// Complete set of attributes identifying a planet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetAttributes {
    /// Planet name
    pub name: String,
    /// Diameter in kilometers
    pub diameter: i64,
    /// Number of inhabitants
    pub population: i64,
    /// Dominant terrain
    pub terrain: String,
}
