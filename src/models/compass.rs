use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ProcessingError;

/// Angular width of one compass sector in degrees.
pub const SECTOR_WIDTH_DEG: f64 = 45.0;

/// The eight compass sectors, declared in table order (N first, clockwise).
///
/// The declaration order is also the `Ord` order, which the annual maxima
/// table uses as its secondary sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CompassSector {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "NE")]
    NorthEast,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "SE")]
    SouthEast,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "SW")]
    SouthWest,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "NW")]
    NorthWest,
}

impl CompassSector {
    /// All sectors in table order.
    pub const ALL: [CompassSector; 8] = [
        CompassSector::North,
        CompassSector::NorthEast,
        CompassSector::East,
        CompassSector::SouthEast,
        CompassSector::South,
        CompassSector::SouthWest,
        CompassSector::West,
        CompassSector::NorthWest,
    ];

    /// Sector at a table index, wrapping modulo 8.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Look up a label such as `"ne"` or `"NW"`. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_uppercase().as_str() {
            "N" => Some(CompassSector::North),
            "NE" => Some(CompassSector::NorthEast),
            "E" => Some(CompassSector::East),
            "SE" => Some(CompassSector::SouthEast),
            "S" => Some(CompassSector::South),
            "SW" => Some(CompassSector::SouthWest),
            "W" => Some(CompassSector::West),
            "NW" => Some(CompassSector::NorthWest),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompassSector::North => "N",
            CompassSector::NorthEast => "NE",
            CompassSector::East => "E",
            CompassSector::SouthEast => "SE",
            CompassSector::South => "S",
            CompassSector::SouthWest => "SW",
            CompassSector::West => "W",
            CompassSector::NorthWest => "NW",
        }
    }

    /// Canonical bearing of the sector centre (0, 45, ..., 315).
    pub fn degrees(&self) -> f64 {
        self.index() as f64 * SECTOR_WIDTH_DEG
    }

    pub fn radians(&self) -> f64 {
        self.degrees().to_radians()
    }
}

impl fmt::Display for CompassSector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CompassSector {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| {
            ProcessingError::InvalidFormat(format!("Unknown compass label: '{}'", s))
        })
    }
}

/// Reduce any bearing to `[0, 360)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly 360.0, and it
/// keeps the sign of `-0.0`; both fold to a positive 0.0.
pub fn normalize_bearing(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    if normalized >= 360.0 || normalized == 0.0 {
        0.0
    } else {
        normalized
    }
}
