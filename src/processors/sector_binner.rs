use crate::models::{normalize_bearing, CompassSector, SECTOR_WIDTH_DEG};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Resolution of a bearing that sits exactly between two sector centres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// The counter-clockwise-earlier sector wins (22.5° → N, 337.5° → NW).
    #[default]
    CounterClockwise,
    /// The clockwise-later sector wins (22.5° → NE, 337.5° → N).
    HalfUp,
    /// The even sector index wins (22.5° → N, 67.5° → E).
    HalfEven,
}

impl TieBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            TieBreak::CounterClockwise => "counter-clockwise",
            TieBreak::HalfUp => "half-up",
            TieBreak::HalfEven => "half-even",
        }
    }

    /// Round a non-negative sector position to the nearest integer index.
    fn round(&self, position: f64) -> f64 {
        match self {
            TieBreak::CounterClockwise => (position - 0.5).ceil(),
            TieBreak::HalfUp => (position + 0.5).floor(),
            TieBreak::HalfEven => {
                let rounded = position.round();
                if (position - position.trunc()) == 0.5 && rounded % 2.0 != 0.0 {
                    rounded - 1.0
                } else {
                    rounded
                }
            }
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "counter-clockwise" | "ccw" => Ok(TieBreak::CounterClockwise),
            "half-up" => Ok(TieBreak::HalfUp),
            "half-even" => Ok(TieBreak::HalfEven),
            _ => Err(format!(
                "Unknown tie-break rule '{}': expected counter-clockwise, half-up or half-even",
                s
            )),
        }
    }
}

/// Maps a bearing to the compass sector whose centre is nearest.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectorBinner {
    tie_break: TieBreak,
}

impl SectorBinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub fn bin(&self, bearing_deg: f64) -> CompassSector {
        let position = normalize_bearing(bearing_deg) / SECTOR_WIDTH_DEG;
        let index = self.tie_break.round(position) as usize;
        CompassSector::from_index(index)
    }

    /// Bearings `[from, to)` that bin to a sector, ignoring the tie rule.
    /// North reports a `from` above `to` because it wraps through 0°.
    pub fn sector_span(sector: CompassSector) -> (f64, f64) {
        let half = SECTOR_WIDTH_DEG / 2.0;
        (
            normalize_bearing(sector.degrees() - half),
            normalize_bearing(sector.degrees() + half),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompassSector::*;

    #[test]
    fn test_sector_centres() {
        let binner = SectorBinner::new();
        for sector in CompassSector::ALL {
            assert_eq!(binner.bin(sector.degrees()), sector);
        }
    }

    #[test]
    fn test_nearest_centre() {
        let binner = SectorBinner::new();
        assert_eq!(binner.bin(0.0), North);
        assert_eq!(binner.bin(44.0), NorthEast);
        assert_eq!(binner.bin(22.4), North);
        assert_eq!(binner.bin(22.6), NorthEast);
        assert_eq!(binner.bin(301.35), NorthWest);
        assert_eq!(binner.bin(291.55), West);
        assert_eq!(binner.bin(359.9), North);
        assert_eq!(binner.bin(337.6), North);
        assert_eq!(binner.bin(-10.0), North);
        assert_eq!(binner.bin(405.0), NorthEast);
    }

    #[test]
    fn test_counter_clockwise_ties() {
        let binner = SectorBinner::with_tie_break(TieBreak::CounterClockwise);
        assert_eq!(binner.bin(22.5), North);
        assert_eq!(binner.bin(67.5), NorthEast);
        assert_eq!(binner.bin(337.5), NorthWest);
    }

    #[test]
    fn test_half_up_ties() {
        let binner = SectorBinner::with_tie_break(TieBreak::HalfUp);
        assert_eq!(binner.bin(22.5), NorthEast);
        assert_eq!(binner.bin(67.5), East);
        assert_eq!(binner.bin(337.5), North);
    }

    #[test]
    fn test_half_even_ties() {
        let binner = SectorBinner::with_tie_break(TieBreak::HalfEven);
        assert_eq!(binner.bin(22.5), North);
        assert_eq!(binner.bin(67.5), East);
        assert_eq!(binner.bin(112.5), East);
        assert_eq!(binner.bin(337.5), North);
        assert_eq!(binner.bin(44.0), NorthEast);
    }

    #[test]
    fn test_binning_is_total() {
        for rule in [TieBreak::CounterClockwise, TieBreak::HalfUp, TieBreak::HalfEven] {
            let binner = SectorBinner::with_tie_break(rule);
            for tenth in 0..3600 {
                let bearing = tenth as f64 / 10.0;
                let sector = binner.bin(bearing);
                let distance = (bearing - sector.degrees()).abs();
                let distance = distance.min(360.0 - distance);
                assert!(distance <= 22.5 + 1e-9, "{} -> {} ({:?})", bearing, sector, rule);
            }
        }
    }

    #[test]
    fn test_tie_break_from_str() {
        assert_eq!("half-up".parse::<TieBreak>().unwrap(), TieBreak::HalfUp);
        assert_eq!("CCW".parse::<TieBreak>().unwrap(), TieBreak::CounterClockwise);
        assert!("nearest".parse::<TieBreak>().is_err());
    }

    #[test]
    fn test_sector_span() {
        assert_eq!(SectorBinner::sector_span(North), (337.5, 22.5));
        assert_eq!(SectorBinner::sector_span(East), (67.5, 112.5));
    }
}
