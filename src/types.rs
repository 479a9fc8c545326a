//! Common types and enums for street-address-rs.

use std::fmt;

/// Cardinal and intercardinal street directions.
///
/// Each direction is accepted in three spellings: the USPS abbreviation, the
/// full English name and the full Spanish name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// N / NORTH / NORTE
    North,
    /// NE / NORTHEAST / NORESTE
    NorthEast,
    /// E / EAST / ESTE
    East,
    /// SE / SOUTHEAST / SURESTE
    SouthEast,
    /// S / SOUTH / SUR
    South,
    /// SW / SOUTHWEST / SUROESTE
    SouthWest,
    /// W / WEST / OESTE
    West,
    /// NW / NORTHWEST / NOROESTE
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// USPS abbreviation.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        }
    }

    /// Full English name.
    pub fn english(&self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::NorthEast => "NORTHEAST",
            Direction::East => "EAST",
            Direction::SouthEast => "SOUTHEAST",
            Direction::South => "SOUTH",
            Direction::SouthWest => "SOUTHWEST",
            Direction::West => "WEST",
            Direction::NorthWest => "NORTHWEST",
        }
    }

    /// Full Spanish name.
    pub fn spanish(&self) -> &'static str {
        match self {
            Direction::North => "NORTE",
            Direction::NorthEast => "NORESTE",
            Direction::East => "ESTE",
            Direction::SouthEast => "SURESTE",
            Direction::South => "SUR",
            Direction::SouthWest => "SUROESTE",
            Direction::West => "OESTE",
            Direction::NorthWest => "NOROESTE",
        }
    }

    /// Match a token against every accepted spelling, ignoring case.
    ///
    /// Only exact matches count; the caller is expected to have stripped
    /// punctuation already.
    pub fn from_token(token: &str) -> Option<Self> {
        let upper = token.to_ascii_uppercase();
        Self::ALL.into_iter().find(|direction| {
            upper == direction.abbreviation()
                || upper == direction.english()
                || upper == direction.spanish()
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}
