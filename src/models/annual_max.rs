use serde::{Deserialize, Serialize};

use crate::models::compass::CompassSector;

/// Largest observed speed in one sector during one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualMaxRecord {
    pub year: i32,
    pub sector: CompassSector,
    pub max_speed: f64,
}

impl AnnualMaxRecord {
    pub fn new(year: i32, sector: CompassSector, max_speed: f64) -> Self {
        Self {
            year,
            sector,
            max_speed,
        }
    }
}
