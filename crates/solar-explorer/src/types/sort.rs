//! Sort field and direction selectors

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::body::CelestialBody;
use crate::error::Error;

/// A displayed column that records can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// First option of the field selector
    #[default]
    Name,
    Satellites,
    RadiusKm,
    SemiMajorAxisAu,
    Eccentricity,
    DensityGCm3,
}

impl SortField {
    /// All fields in table column order
    pub const ALL: [SortField; 6] = [
        SortField::Name,
        SortField::Satellites,
        SortField::RadiusKm,
        SortField::SemiMajorAxisAu,
        SortField::Eccentricity,
        SortField::DensityGCm3,
    ];

    /// Wire name, matching the dataset's JSON keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Satellites => "satellites",
            Self::RadiusKm => "radius_km",
            Self::SemiMajorAxisAu => "semi_major_axis_au",
            Self::Eccentricity => "eccentricity",
            Self::DensityGCm3 => "density_g_cm3",
        }
    }

    /// Column header label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Satellites => "Satellites",
            Self::RadiusKm => "Radius (km)",
            Self::SemiMajorAxisAu => "Semi-major Axis (AU)",
            Self::Eccentricity => "Eccentricity",
            Self::DensityGCm3 => "Density (g/cm³)",
        }
    }

    /// Extract this field's comparison key from a record
    pub fn key<'a>(&self, body: &'a CelestialBody) -> SortKey<'a> {
        let number = match self {
            Self::Name => return SortKey::Text(&body.name),
            Self::Satellites => body.satellites.map(f64::from),
            Self::RadiusKm => body.radius_km,
            Self::SemiMajorAxisAu => body.semi_major_axis_au,
            Self::Eccentricity => body.eccentricity,
            Self::DensityGCm3 => body.density_g_cm3,
        };
        number.map_or(SortKey::Missing, SortKey::Number)
    }

    /// Three-way ascending comparison of two records on this field
    pub fn compare(&self, a: &CelestialBody, b: &CelestialBody) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| Error::UnknownSortField(s.to_string()))
    }
}

/// Comparison key for a single record field
///
/// `Missing` orders before every present value; numbers use a total order.
#[derive(Debug, Clone, Copy)]
pub enum SortKey<'a> {
    Missing,
    Number(f64),
    Text(&'a str),
}

impl Ord for SortKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Missing, Self::Missing) => Ordering::Equal,
            (Self::Missing, _) => Ordering::Less,
            (_, Self::Missing) => Ordering::Greater,
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            // A field yields either numbers or text, never both
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for SortKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey<'_> {}

/// Sort direction toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Orient an ascending comparison result
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(Error::UnknownSortDirection(s.to_string())),
        }
    }
}
